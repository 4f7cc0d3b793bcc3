//! Library integration tests.

use ross_styles::RossError;

#[test]
fn error_types_are_public() {
    let err = RossError::UnknownTemplate {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ross_styles::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use ross_styles::cli::{Cli, Commands};

    let cli = Cli::parse_from(["ross", "css", "--tag"]);

    if let Commands::Css(args) = cli.command {
        assert!(args.tag);
        assert!(!args.no_cache);
    } else {
        panic!("Expected Css command");
    }
}

#[test]
fn ui_types_are_public() {
    use ross_styles::ui::{MockUI, OutputMode, UserInterface};

    let mut ui = MockUI::with_mode(OutputMode::Quiet);
    ui.data("payload");
    assert_eq!(ui.output_mode(), OutputMode::Quiet);
    assert_eq!(ui.data_output(), ["payload"]);
}
