//! Two-byte float datapoints (`9.xxx`).
//!
//! Values saturate to the type's range before encoding. Precision degrades
//! with magnitude, see [`dpt_formats::float16`].

use dpt_formats::{pack_f16, unpack_f16};

ranged_float_datapoint!(
    /// 9.001, air temperature.
    Temperature, "9.001", "°C", -273.0, 670_760.0, [u8; 3], pack_f16, unpack_f16
);

ranged_float_datapoint!(
    /// 9.004
    Illuminance, "9.004", "lux", 0.0, 670_760.0, [u8; 3], pack_f16, unpack_f16
);

ranged_float_datapoint!(
    /// 9.005
    WindSpeed, "9.005", "m/s", 0.0, 670_760.0, [u8; 3], pack_f16, unpack_f16
);

ranged_float_datapoint!(
    /// 9.007, relative humidity.
    Humidity, "9.007", "%", 0.0, 670_760.0, [u8; 3], pack_f16, unpack_f16
);
