// Declares a newtype datapoint over one of the dpt_formats layouts.
macro_rules! datapoint {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty), $id:literal, $unit:literal,
        [u8; $len:literal], $pack:path, $unpack:path
        $(, derive($($derive:ident),*))?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default $($(, $derive)*)?)]
        pub struct $name(pub $inner);

        impl $crate::DatapointValue for $name {
            const ID: &'static str = $id;
            const UNIT: &'static str = $unit;
            type Frame = [u8; $len];

            fn pack(&self) -> Self::Frame {
                $pack(self.clamped())
            }

            fn unpack(data: &[u8]) -> $crate::Result<Self> {
                $unpack(data).map(Self)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// A boolean datapoint displayed by the meaning of each state.
macro_rules! boolean_datapoint {
    ($(#[$meta:meta])* $name:ident, $id:literal, off = $off:literal, on = $on:literal) => {
        datapoint!(
            $(#[$meta])*
            $name(bool), $id, "", [u8; 1], dpt_formats::pack_b1, dpt_formats::unpack_b1,
            derive(Eq, Hash)
        );

        impl $name {
            fn clamped(&self) -> bool {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(if self.0 { $on } else { $off })
            }
        }
    };
}

// An integer datapoint whose full type range is valid.
macro_rules! counter_datapoint {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty), $id:literal, $unit:literal, $pack:path, $unpack:path
    ) => {
        datapoint!(
            $(#[$meta])*
            $name($inner), $id, $unit, [u8; 5], $pack, $unpack,
            derive(Eq, Hash, PartialOrd, Ord)
        );

        impl $name {
            fn clamped(&self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{} {}", self.0, $unit)
            }
        }
    };
}

// A float datapoint saturated to `min..=max` before packing.
macro_rules! ranged_float_datapoint {
    (
        $(#[$meta:meta])*
        $name:ident, $id:literal, $unit:literal, $min:expr, $max:expr,
        [u8; $len:literal], $pack:path, $unpack:path
    ) => {
        datapoint!(
            $(#[$meta])*
            $name(f32), $id, $unit, [u8; $len], $pack, $unpack,
            derive(PartialOrd)
        );

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            fn clamped(&self) -> f32 {
                self.0.clamp(Self::MIN, Self::MAX)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{:.2} {}", self.0, $unit)
            }
        }
    };
}
