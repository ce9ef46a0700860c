//! Value enumerations carried in command parameters.

use crate::error::Error;

/// Declares a `#[repr(u8)]` enum with a fallible conversion from its raw byte.
macro_rules! value_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The byte sent on the wire.
            pub const fn code(self) -> u8 {
                self as u8
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(value: u8) -> Result<Self, Error> {
                match value {
                    $( v if v == $name::$variant as u8 => Ok($name::$variant), )+
                    _ => Err(Error::InvalidValue { kind: $kind, value }),
                }
            }
        }
    };
}

value_enum! {
    /// Tone-mapping scene mode.
    SceneMode, "scene mode" {
        LowHighlight = 0x00,
        LinearStretch = 0x01,
        LowContrast = 0x02,
        GeneralMode = 0x03,
        HighContrast = 0x04,
        Highlight = 0x05,
        Outline = 0x09,
    }
}

value_enum! {
    /// Pseudo-color palette.
    PseudoColor, "pseudo color" {
        WhiteHot = 0x00,
        Sepia = 0x01,
        Ironbow = 0x02,
        Rainbow = 0x03,
        Night = 0x04,
        Aurora = 0x05,
        RedHot = 0x06,
        Jungle = 0x07,
        Medical = 0x08,
        BlackHot = 0x09,
        GoldenRed = 0x0A,
    }
}

value_enum! {
    FlipMode, "flip mode" {
        NoFlip = 0x00,
        XFlip = 0x01,
        YFlip = 0x02,
        XyFlip = 0x03,
    }
}

value_enum! {
    /// Pipeline stage routed to the video output.
    ImageSource, "image source" {
        Ir = 0x00,
        Kbc = 0x01,
        Tnr = 0x02,
        Snr = 0x03,
        Dde = 0x04,
        Yuv = 0x05,
    }
}

value_enum! {
    DigitalVideoFormat, "digital video format" {
        UsbProgressive = 0x00,
        DvpProgressive = 0x01,
        Bt656Progressive = 0x02,
        Bt656Interlaced = 0x12,
        MipiProgressive = 0x03,
    }
}

value_enum! {
    /// Output and detector frame rates.
    ///
    /// 30/60 Hz apply to the 384 and 640 cores, 25/50 Hz to the 256 core.
    DigitalFrameRate, "frame rate" {
        Hz30 = 0x1E,
        Hz60 = 0x3C,
        Hz25 = 0x19,
        Hz50 = 0x32,
        NotApplicable = 0x00,
    }
}

value_enum! {
    AnalogVideoFormat, "analog video format" {
        Ntsc = 0x00,
        Pal = 0x01,
    }
}

value_enum! {
    YuvFormat, "YUV format" {
        Uyvy = 0x00,
        Vyuy = 0x01,
        Yuyv = 0x02,
        Yvyu = 0x03,
    }
}

value_enum! {
    ShutterPosition, "shutter position" {
        Closed = 0x00,
        Open = 0x01,
    }
}

value_enum! {
    SleepState, "sleep state" {
        Awake = 0x00,
        Asleep = 0x01,
    }
}

/// Sensor core size, identified by USB product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreModel {
    Core256,
    Core384,
    Core640,
    /// A user-configured id outside the known set.
    Unknown,
}

impl CoreModel {
    /// Whether `rate` is meaningful for this core.
    ///
    /// `NotApplicable` is accepted everywhere; `Unknown` cores accept any rate.
    pub fn supports_frame_rate(self, rate: DigitalFrameRate) -> bool {
        use DigitalFrameRate::*;
        match (self, rate) {
            (_, NotApplicable) | (CoreModel::Unknown, _) => true,
            (CoreModel::Core256, Hz25 | Hz50) => true,
            (CoreModel::Core384 | CoreModel::Core640, Hz30 | Hz60) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_known_tags() {
        assert_eq!(SceneMode::try_from(0x09).unwrap(), SceneMode::Outline);
        assert_eq!(PseudoColor::try_from(0x0A).unwrap(), PseudoColor::GoldenRed);
        assert_eq!(
            DigitalVideoFormat::try_from(0x12).unwrap(),
            DigitalVideoFormat::Bt656Interlaced
        );
        assert_eq!(DigitalFrameRate::try_from(0x3C).unwrap(), DigitalFrameRate::Hz60);
    }

    #[test]
    fn test_try_from_rejects_gaps() {
        // 0x06..=0x08 are not scene modes even though 0x09 is.
        for raw in 0x06..=0x08 {
            let err = SceneMode::try_from(raw).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidValue {
                    kind: "scene mode",
                    ..
                }
            ));
        }
        assert!(AnalogVideoFormat::try_from(2).is_err());
        assert!(ShutterPosition::try_from(2).is_err());
    }

    #[test]
    fn test_all_round_trips_through_code() {
        for &color in PseudoColor::ALL {
            assert_eq!(PseudoColor::try_from(color.code()).unwrap(), color);
        }
        assert_eq!(PseudoColor::ALL.len(), 11);
    }

    #[test]
    fn test_core_frame_rates() {
        assert!(CoreModel::Core256.supports_frame_rate(DigitalFrameRate::Hz25));
        assert!(!CoreModel::Core256.supports_frame_rate(DigitalFrameRate::Hz60));
        assert!(CoreModel::Core640.supports_frame_rate(DigitalFrameRate::Hz60));
        assert!(!CoreModel::Core384.supports_frame_rate(DigitalFrameRate::Hz50));
        assert!(CoreModel::Core384.supports_frame_rate(DigitalFrameRate::NotApplicable));
        assert!(CoreModel::Unknown.supports_frame_rate(DigitalFrameRate::Hz25));
    }
}
