//! The command line arguments shared by the frontends.

use crate::{error::UnknownPresetError, Minefield, Preset};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The amount of rows of a custom field (requires --width and --mines).
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub height: Option<i32>,
    /// The amount of columns of a custom field.
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<i32>,
    /// The amount of mines of a custom field.
    #[arg(short, long, allow_negative_numbers = true)]
    pub mines: Option<i32>,
    /// Skip the menu and start the named preset (Test, Easy, Medium or Hard).
    #[arg(short, long, conflicts_with_all = ["height", "width", "mines"])]
    pub preset: Option<String>,
    /// Seed for the mine placement, to replay the same layouts.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Append the log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Figures out whether the arguments describe a game to start right away, skipping the menu.
    pub fn game_setup(&self) -> Result<Option<Minefield>, UnknownPresetError> {
        if let Some(name) = &self.preset {
            let preset = Preset::find(name).ok_or_else(|| UnknownPresetError(name.clone()))?;
            return Ok(Some(preset.minefield()));
        }

        Ok(match (self.height, self.width, self.mines) {
            (Some(height), Some(width), Some(mines)) => Some(Minefield::new(height, width, mines)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod test {
    use super::Args;
    use crate::error::UnknownPresetError;
    use clap::Parser;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(["minefield"].iter().chain(args).copied()).unwrap()
    }

    #[test]
    fn no_arguments_lead_to_the_menu() {
        assert_eq!(parse(&[]).game_setup(), Ok(None));
    }

    #[test]
    fn a_preset_is_found_by_its_name() {
        let field = parse(&["-p", "hard"]).game_setup().unwrap().unwrap();

        assert_eq!((field.width(), field.height(), field.mine_count()), (30, 16, 99));
    }

    #[test]
    fn an_unknown_preset_is_an_error() {
        assert_eq!(
            parse(&["--preset", "extreme"]).game_setup(),
            Err(UnknownPresetError("extreme".to_string()))
        );
    }

    #[test]
    fn a_custom_field_needs_all_three_values_and_gets_clamped() {
        assert_eq!(parse(&["-H", "5", "-w", "7"]).game_setup(), Ok(None));

        let field = parse(&["-H", "-3", "-w", "7", "-m", "100"])
            .game_setup()
            .unwrap()
            .unwrap();
        assert_eq!((field.width(), field.height(), field.mine_count()), (7, 1, 6));
    }

    #[test]
    fn a_preset_conflicts_with_custom_dimensions() {
        assert!(Args::try_parse_from(["minefield", "-p", "easy", "-w", "5"]).is_err());
    }

    #[test]
    fn the_seed_and_the_log_file_are_optional() {
        let args = parse(&["--seed", "42", "--log-file", "game.log"]);

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_file.as_deref(), Some(std::path::Path::new("game.log")));
    }
}
