//! Library integration tests.

use docker_env_init::DockerEnvError;

#[test]
fn error_types_are_public() {
    let err = DockerEnvError::UnknownSystem {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
    assert!(err.is_not_found());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> docker_env_init::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use docker_env_init::cli::{Cli, Commands};

    let cli = Cli::parse_from(["docker-env-init", "list", "--json"]);

    if let Commands::List(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn dispatcher_runs_commands_against_mock_ui() {
    use clap::Parser;
    use docker_env_init::cli::{Cli, CommandDispatcher};
    use docker_env_init::config::{ConfigPaths, Settings};
    use docker_env_init::ui::MockUI;
    use tempfile::TempDir;

    let temp = TempDir::new().unwrap();
    let dispatcher = CommandDispatcher::new(
        temp.path().to_path_buf(),
        ConfigPaths::from_base(temp.path().join("home")),
        Settings::default(),
    );
    let mut ui = MockUI::new();

    let cli = Cli::parse_from(["docker-env-init", "current"]);
    let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

    assert!(result.success);
    assert!(ui.has_message("No docker-compose.yml active"));
}

#[test]
fn ui_types_are_public() {
    use docker_env_init::ui::{OutputMode, Prompt, PromptResult, UserInterface};

    let mut ui = docker_env_init::ui::MockUI::with_mode(OutputMode::Verbose);
    ui.set_prompt_response("overwrite", "yes");
    let answer = ui
        .prompt(&Prompt::confirm("overwrite", "Overwrite?", false))
        .unwrap();
    assert!(matches!(answer, PromptResult::Bool(true)));
}
