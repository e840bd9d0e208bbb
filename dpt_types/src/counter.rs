//! Four-byte counters: unsigned (`12.001`) and signed (`13.xxx`).

use dpt_formats::{pack_u32, pack_v32, unpack_u32, unpack_v32};

counter_datapoint!(
    /// 12.001
    ValueCounter(u32), "12.001", "pulses", pack_u32, unpack_u32
);

counter_datapoint!(
    /// 13.001
    CounterPulses(i32), "13.001", "pulses", pack_v32, unpack_v32
);

counter_datapoint!(
    /// 13.002
    FlowRate(i32), "13.002", "m³/h", pack_v32, unpack_v32
);

counter_datapoint!(
    /// 13.010
    ActiveEnergy(i32), "13.010", "Wh", pack_v32, unpack_v32
);

counter_datapoint!(
    /// 13.011
    ApparentEnergy(i32), "13.011", "VAh", pack_v32, unpack_v32
);

counter_datapoint!(
    /// 13.012
    ReactiveEnergy(i32), "13.012", "VARh", pack_v32, unpack_v32
);

counter_datapoint!(
    /// 13.013
    ActiveEnergyKwh(i32), "13.013", "kWh", pack_v32, unpack_v32
);

counter_datapoint!(
    /// 13.014
    ApparentEnergyKvah(i32), "13.014", "kVAh", pack_v32, unpack_v32
);

counter_datapoint!(
    /// 13.015
    ReactiveEnergyKvarh(i32), "13.015", "kVARh", pack_v32, unpack_v32
);
