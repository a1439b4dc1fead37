use super::*;
use anyhow::anyhow;
use std::cell::RefCell;

struct FixedSearch(Option<&'static str>);

impl BundleSearch for FixedSearch {
    fn search(&self, bundle_id: &str) -> anyhow::Result<String> {
        Ok(match self.0 {
            Some(id) if id == bundle_id => format!("/Applications/{id}.app\n"),
            _ => String::new(),
        })
    }
}

#[derive(Default)]
struct RecordingRunner {
    runs: RefCell<Vec<Invocation>>,
    fail: bool,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> anyhow::Result<CapturedOutput> {
        self.runs.borrow_mut().push(invocation.clone());
        if self.fail {
            return Err(anyhow!("no such file"));
        }
        Ok(CapturedOutput {
            status: Some(0),
            ..CapturedOutput::default()
        })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    alerts: RefCell<Vec<(String, String)>>,
}

impl UserNotifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str) {
        self.alerts
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}

const VS: &str = "com.microsoft.visual-studio";

fn launcher(
    installed: Option<&'static str>,
) -> Launcher<FixedSearch, RecordingRunner, RecordingNotifier> {
    Launcher::new(
        TargetApp::VisualStudio,
        Resolver::for_app(FixedSearch(installed), TargetApp::VisualStudio),
        RecordingRunner::default(),
        RecordingNotifier::default(),
    )
}

#[test]
fn test_not_installed_alerts_once_and_spawns_nothing() {
    let l = launcher(None);
    assert_eq!(l.launch(None).unwrap(), LaunchOutcome::NotInstalled);
    assert_eq!(l.notifier.alerts.borrow().len(), 1);
    assert_eq!(l.notifier.alerts.borrow()[0].0, "No IDE Found");
    assert!(l.runner.runs.borrow().is_empty());
}

#[test]
fn test_launch_with_file_forwards_path() {
    let l = launcher(Some(VS));
    let outcome = l.launch(Some(Path::new("/tmp/x.sln"))).unwrap();
    assert!(matches!(outcome, LaunchOutcome::Launched(_)));

    let runs = l.runner.runs.borrow();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].program, PathBuf::from(OPEN));
    assert_eq!(runs[0].args, ["-n", "-b", VS, "--args", "/tmp/x.sln"]);
    assert!(runs[0].command_line().ends_with(r#"--args "/tmp/x.sln""#));
    assert!(l.notifier.alerts.borrow().is_empty());
}

#[test]
fn test_launch_without_file_has_no_args_segment() {
    let l = launcher(Some(VS));
    l.launch(None).unwrap();
    let runs = l.runner.runs.borrow();
    assert_eq!(runs[0].args, ["-n", "-b", VS]);
}

#[test]
fn test_empty_path_treated_as_no_file() {
    let l = launcher(Some(VS));
    l.launch(Some(Path::new(""))).unwrap();
    assert!(!l.runner.runs.borrow()[0].args.contains(&"--args".to_string()));
}

#[test]
fn test_each_launch_alerts_when_missing() {
    let l = launcher(None);
    l.launch(None).unwrap();
    l.launch(None).unwrap();
    assert_eq!(l.notifier.alerts.borrow().len(), 2);
    assert_eq!(l.resolver.installed_identifier(), None);
}

#[test]
fn test_spawn_failure_is_an_error() {
    let l = Launcher::new(
        TargetApp::VisualStudio,
        Resolver::for_app(FixedSearch(Some(VS)), TargetApp::VisualStudio),
        RecordingRunner { fail: true, ..RecordingRunner::default() },
        RecordingNotifier::default(),
    );
    assert!(l.launch(None).is_err());
}

#[test]
fn test_invocation_path_augmented() {
    let inv = open_invocation(&LaunchSettings::default(), VS, None, Some("/usr/bin:")).unwrap();
    let path = inv.env_var("PATH").unwrap();
    assert_eq!(path, "/usr/bin:/usr/local/bin");
    assert!(!path.contains("::"));
    assert!(path.ends_with(EXTRA_PATH));
    assert_eq!(path.matches(EXTRA_PATH).count(), 1);
}

#[test]
fn test_invocation_without_new_instance() {
    let settings = LaunchSettings {
        new_instance: false,
        ..LaunchSettings::default()
    };
    let inv = open_invocation(&settings, VS, None, None).unwrap();
    assert_eq!(inv.args, ["-b", VS]);
    assert_eq!(inv.env_var("PATH"), Some(EXTRA_PATH));
}

#[test]
fn test_command_line_rendering() {
    let inv = open_invocation(
        &LaunchSettings::default(),
        VS,
        Some(Path::new("/Users/me/My Project/App.sln")),
        None,
    )
    .unwrap();
    insta::assert_snapshot!(
        inv.command_line(),
        @r#"/usr/bin/open -n -b com.microsoft.visual-studio --args "/Users/me/My Project/App.sln""#
    );
}

#[cfg(unix)]
fn echo_launcher(open_command: &str) -> Launcher<FixedSearch, SystemRunner, RecordingNotifier> {
    Launcher::new(
        TargetApp::VisualStudio,
        Resolver::for_app(FixedSearch(Some(VS)), TargetApp::VisualStudio),
        SystemRunner,
        RecordingNotifier::default(),
    )
    .with_settings(LaunchSettings {
        open_command: PathBuf::from(open_command),
        ..LaunchSettings::default()
    })
}

#[cfg(unix)]
#[test]
fn test_real_process_receives_arguments() {
    let l = echo_launcher("/bin/echo");
    match l.launch(Some(Path::new("/tmp/x.sln"))).unwrap() {
        LaunchOutcome::Launched(captured) => {
            assert_eq!(captured.stdout, format!("-n -b {VS} --args /tmp/x.sln\n"));
            assert_eq!(captured.status, Some(0));
        }
        LaunchOutcome::NotInstalled => panic!("expected a launch"),
    }
}

#[cfg(unix)]
#[test]
fn test_real_spawn_failure_is_an_error() {
    let l = echo_launcher("/nonexistent/open");
    assert!(l.launch(None).is_err());
    assert!(l.notifier.alerts.borrow().is_empty());
}
