use crate::Minefield;
use std::fmt::{Display, Formatter};

/// A named field configuration offered in the menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub width: i32,
    pub height: i32,
    pub mine_count: i32,
}

/// The presets in the order they're listed in the menu. The first one is selected initially.
pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "Test",
        width: 5,
        height: 5,
        mine_count: 3,
    },
    Preset {
        name: "Easy",
        width: 9,
        height: 9,
        mine_count: 10,
    },
    Preset {
        name: "Medium",
        width: 16,
        height: 16,
        mine_count: 40,
    },
    Preset {
        name: "Hard",
        width: 30,
        height: 16,
        mine_count: 99,
    },
];

impl Preset {
    /// Looks a preset up by its name, ignoring the case.
    pub fn find(name: &str) -> Option<&'static Preset> {
        PRESETS
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Creates a fresh field for the preset.
    pub fn minefield(&self) -> Minefield {
        Minefield::new(self.height, self.width, self.mine_count)
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}x{}, {} mines)",
            self.name, self.width, self.height, self.mine_count
        )
    }
}

#[cfg(test)]
mod test {
    use super::{Preset, PRESETS};

    #[test]
    fn find_ignores_the_case() {
        assert_eq!(Preset::find("hard"), Some(&PRESETS[3]));
        assert_eq!(Preset::find(" MEDIUM "), Some(&PRESETS[2]));
        assert_eq!(Preset::find("expert"), None);
    }

    #[test]
    fn display_lists_the_dimensions_and_mines() {
        assert_eq!(PRESETS[3].to_string(), "Hard (30x16, 99 mines)");
    }

    #[test]
    fn every_preset_fits_without_clamping() {
        for preset in PRESETS {
            let field = preset.minefield();

            assert_eq!(field.width() as i32, preset.width);
            assert_eq!(field.height() as i32, preset.height);
            assert_eq!(field.mine_count() as i32, preset.mine_count);
        }
    }
}
