//! Integration tests for launch planning against a real directory layout.

use std::fs;
use std::path::Path;

use dailykit_core::{Interpreter, LaunchPlan, LaunchTarget, Settings, venv_python_candidates};
use tempfile::TempDir;

fn install_fake_venv(base: &Path, venv_dir: &str) {
    let python = venv_python_candidates(base, venv_dir).remove(0);
    fs::create_dir_all(python.parent().unwrap()).unwrap();
    fs::write(python, b"").unwrap();
}

#[test]
fn test_venv_layout_next_to_script_is_preferred() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("To-Do_list_Application.py"), b"print('hi')").unwrap();
    install_fake_venv(dir.path(), ".venv");

    let plan = LaunchPlan::resolve(dir.path(), LaunchTarget::TodoList, ".venv", "py");

    let expected = venv_python_candidates(dir.path(), ".venv").remove(0);
    assert_eq!(plan.interpreter, Interpreter::Venv(expected));
    assert_eq!(plan.args(), ["To-Do_list_Application.py"]);
    assert_eq!(plan.working_dir, dir.path());
}

#[test]
fn test_plan_does_not_depend_on_current_directory() {
    let dir = TempDir::new().unwrap();
    install_fake_venv(dir.path(), ".venv");

    // The process cwd is wherever the test runner put us, never `dir`
    let cwd = std::env::current_dir().unwrap();
    assert_ne!(cwd, dir.path());

    let plan = LaunchPlan::resolve(dir.path(), LaunchTarget::HabitTracker, ".venv", "py");
    assert!(plan.interpreter.is_venv());
    assert_eq!(plan.working_dir, dir.path());
}

#[test]
fn test_every_target_falls_back_with_same_script_argument() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::default();

    for target in LaunchTarget::ALL {
        let plan = LaunchPlan::resolve(dir.path(), target, &settings.venv_dir, "py");
        assert_eq!(plan.interpreter, Interpreter::Fallback("py".to_string()));
        assert_eq!(plan.args(), [target.script_name()]);
        assert!(plan.command_line().ends_with(target.script_name()));
    }
}
