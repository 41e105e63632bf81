//! Tests for command-line parsing and the growth-to-export pipeline

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridtown::CityError;
    use gridtown::io::cli::{Cli, CityBuilder};
    use gridtown::io::configuration::{
        DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_SEED, DEFAULT_TILE_COUNT, MAP_PIXELS_PER_TILE,
    };
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests CLI parsing with no arguments at all
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let args = vec!["program"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.output, PathBuf::from("city.png"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.tiles, DEFAULT_TILE_COUNT);
        assert_eq!(cli.attempts, DEFAULT_MAX_PLACEMENT_ATTEMPTS);
        assert_eq!(cli.pixels_per_tile, MAP_PIXELS_PER_TILE);
        assert!(!cli.quiet);
        assert!(!cli.overwrite);
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming long flags to ensure they're matched
    #[test]
    fn test_cli_parse_all_args() {
        let args = vec![
            "program",
            "downtown.png",
            "--seed",
            "123",
            "--tiles",
            "40",
            "--attempts",
            "9",
            "--pixels-per-tile",
            "4",
            "--quiet",
            "--overwrite",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.output, PathBuf::from("downtown.png"));
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.tiles, 40);
        assert_eq!(cli.attempts, 9);
        assert_eq!(cli.pixels_per_tile, 4);
        assert!(cli.quiet);
        assert!(cli.overwrite);
    }

    // Tests short flag parsing (-s, -t, -a, -p)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let args = vec!["program", "-s", "999", "-t", "64", "-a", "16", "-p", "2"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.seed, 999);
        assert_eq!(cli.tiles, 64);
        assert_eq!(cli.attempts, 16);
        assert_eq!(cli.pixels_per_tile, 2);
    }

    // Tests file skip behavior based on --overwrite flag
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_logic() {
        let args_default = vec!["program"];
        let cli_default = Cli::parse_from(args_default);
        assert!(cli_default.skip_existing());

        let args_overwrite = vec!["program", "--overwrite"];
        let cli_overwrite = Cli::parse_from(args_overwrite);
        assert!(!cli_overwrite.skip_existing());
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        let args_default = vec!["program"];
        let cli_default = Cli::parse_from(args_default);
        assert!(cli_default.should_show_progress());

        let args_quiet = vec!["program", "--quiet"];
        let cli_quiet = Cli::parse_from(args_quiet);
        assert!(!cli_quiet.should_show_progress());
    }

    // Tests CityBuilder construction
    // Verified by modifying constructor logic
    #[test]
    fn test_city_builder_new() {
        let cli = create_quiet_cli("test.png");
        let _builder = CityBuilder::new(cli);
    }

    // Tests a zero tile target is rejected before any work
    // Verified by removing the parameter validation
    #[test]
    fn test_process_zero_tiles() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("city.png");
        let args = vec![
            "program",
            output.to_str().unwrap(),
            "--tiles",
            "0",
            "--quiet",
        ];
        let cli = Cli::parse_from(args);
        let mut builder = CityBuilder::new(cli);

        let result = builder.process();
        match result {
            Err(CityError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "tiles");
            }
            _ => unreachable!("Expected parameter validation to fail"),
        }
        assert!(!output.exists());
    }

    // Tests skip logic when the output file exists
    // Verified by removing skip check
    #[test]
    fn test_skip_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("city.png");
        fs::write(&output, "placeholder").unwrap();

        let cli = create_quiet_cli(output.to_str().unwrap());
        let mut builder = CityBuilder::new(cli);

        let result = builder.process();
        assert!(result.is_ok());

        // The placeholder survives because the run was skipped
        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(contents, "placeholder");
    }

    // Tests --overwrite replaces an existing output file
    // Verified by keeping the skip check active under overwrite
    #[test]
    fn test_overwrite_replaces_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("city.png");
        fs::write(&output, "placeholder").unwrap();

        let args = vec![
            "program",
            output.to_str().unwrap(),
            "--tiles",
            "6",
            "--seed",
            "5",
            "--quiet",
            "--overwrite",
        ];
        let cli = Cli::parse_from(args);
        let mut builder = CityBuilder::new(cli);

        let result = builder.process();
        assert!(result.is_ok());

        let metadata = fs::metadata(&output).unwrap();
        assert!(metadata.len() > "placeholder".len() as u64);
    }

    // Tests a small end-to-end run writes the map
    // Verified by dropping the export call
    #[test]
    fn test_process_grows_and_exports() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("small_city.png");
        let args = vec![
            "program",
            output.to_str().unwrap(),
            "--tiles",
            "8",
            "--seed",
            "5",
            "--quiet",
        ];
        let cli = Cli::parse_from(args);
        let mut builder = CityBuilder::new(cli);

        let result = builder.process();
        assert!(result.is_ok());
        assert!(output.exists());
    }

    fn create_quiet_cli(output: &str) -> Cli {
        let args = vec!["program", output, "--quiet"];
        Cli::parse_from(args)
    }
}
