use thiserror::Error;

/// The enum represents everything that can go wrong when talking to a [`crate::Minefield`] through its checked
/// methods.
///
/// Construction never fails: out-of-range dimensions and mine amounts are clamped instead.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The requested coordinate lies outside the grid. Typed coordinates may be negative, hence the signed values.
    #[error("coordinate ({x}, {y}) is outside of the {width}x{height} field")]
    OutOfRange {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
}

/// A preset name given on the command line that matches none of [`crate::PRESETS`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown preset `{0}`")]
pub struct UnknownPresetError(pub String);

#[cfg(test)]
mod test {
    use super::{FieldError, UnknownPresetError};

    #[test]
    fn out_of_range_message_names_the_coordinate_and_the_field_size() {
        let error = FieldError::OutOfRange {
            x: 7,
            y: 2,
            width: 5,
            height: 4,
        };

        assert_eq!(
            error.to_string(),
            "coordinate (7, 2) is outside of the 5x4 field"
        );
    }

    #[test]
    fn out_of_range_message_keeps_the_sign() {
        let error = FieldError::OutOfRange {
            x: -1,
            y: 2,
            width: 5,
            height: 4,
        };

        assert_eq!(
            error.to_string(),
            "coordinate (-1, 2) is outside of the 5x4 field"
        );
    }

    #[test]
    fn unknown_preset_message_quotes_the_name() {
        assert_eq!(
            UnknownPresetError("extreme".to_string()).to_string(),
            "unknown preset `extreme`"
        );
    }
}
