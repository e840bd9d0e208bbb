//! Single-bit datapoints (`1.xxx`).

boolean_datapoint!(
    /// 1.001, on/off.
    Switch, "1.001", off = "Off", on = "On"
);

boolean_datapoint!(
    /// 1.002
    Bool, "1.002", off = "False", on = "True"
);

boolean_datapoint!(
    /// 1.003
    Enable, "1.003", off = "Disable", on = "Enable"
);

boolean_datapoint!(
    /// 1.008, movement direction. `true` is down.
    UpDown, "1.008", off = "Up", on = "Down"
);

boolean_datapoint!(
    /// 1.009, `true` is closed.
    OpenClose, "1.009", off = "Open", on = "Close"
);

boolean_datapoint!(
    /// 1.010
    Start, "1.010", off = "Stop", on = "Start"
);
