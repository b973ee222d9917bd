use fw_version_stamp::app::{stamp_with, run_hosted};
use fw_version_stamp::{CallerEnvironment, stamp};
use fw_version_stamp_infra::{FixedClock, FsTextStore};
use fw_version_stamp_shared_kernel::BuildDate;
use fw_version_stamp_usecase::{StampRequest, VersionStamper};
use proptest::prelude::*;
use std::path::PathBuf;

use crate::common::{FirmwareProject, SCENARIO_INPUT, SCENARIO_OUTPUT};

fn today() -> String {
    chrono::Local::now().format("%y%m%d").to_string()
}

/// Runs `f` and returns the local dates seen before and after it, so a run that
/// crosses midnight accepts either day.
fn around_today(f: impl FnOnce()) -> [String; 2] {
    let before = today();
    f();
    [before, today()]
}

fn stamp_on(project: &FirmwareProject, date: BuildDate) -> bool {
    let clock = FixedClock::from(date);
    let stamper = VersionStamper::new(&FsTextStore, &clock);
    let request = StampRequest {
        project_root: project.root().to_path_buf(),
        working_dir: project.root().to_path_buf(),
        dry_run: false,
    };
    stamp_with(&mut Vec::<u8>::new(), &stamper, &request)
}

struct ProjectDir(Option<PathBuf>);

impl CallerEnvironment for ProjectDir {
    fn project_directory(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

#[test]
fn scenario_from_header_with_other_defines() {
    let project = FirmwareProject::with_config(SCENARIO_INPUT);

    assert!(stamp_on(&project, BuildDate::from_ymd(2025, 12, 6).unwrap()));
    assert_eq!(project.config(), SCENARIO_OUTPUT);
}

#[test]
fn stamping_twice_equals_stamping_once() {
    let project = FirmwareProject::with_config(SCENARIO_INPUT);
    let date = BuildDate::from_ymd(2025, 12, 6).unwrap();

    assert!(stamp_on(&project, date));
    let once = project.config();
    assert!(stamp_on(&project, date));
    assert_eq!(project.config(), once);
}

#[test]
fn stamp_uses_local_clock() {
    let project = FirmwareProject::with_config("#define FIRMWARE_VERSION \"7.Q2.0.190101\"\n");

    let mut ok = false;
    let days = around_today(|| ok = stamp(Some(project.root())));

    assert!(ok);
    let content = project.config();
    assert!(
        days.iter().any(|d| content == format!("#define FIRMWARE_VERSION \"7.Q2.0.{d}\"\n")),
        "unexpected content {content:?}"
    );
}

#[test]
fn stamp_on_missing_header_does_not_create_it() {
    let project = FirmwareProject::empty();

    assert!(!stamp(Some(project.root())));
    assert!(!project.config_path().exists());
    assert!(!project.config_path().parent().unwrap().exists());
}

#[test]
fn stamp_on_mismatch_keeps_content() {
    let project = FirmwareProject::with_config("#define FIRMWARE_VERSION \"bogus\"\n");

    assert!(!stamp(Some(project.root())));
    assert_eq!(project.config(), "#define FIRMWARE_VERSION \"bogus\"\n");
}

#[cfg(unix)]
#[test]
fn unreadable_header_is_a_reported_failure() {
    let project = FirmwareProject::with_config("");
    std::fs::write(project.config_path(), [b'#', 0xff, 0xfe]).unwrap();

    assert!(!stamp(Some(project.root())));
}

#[cfg(unix)]
#[test]
fn symlinked_header_is_stamped_through_the_link() {
    let project = FirmwareProject::empty();
    let include = project.root().join("include");
    std::fs::create_dir_all(&include).unwrap();
    let target = include.join("real_config.h");
    std::fs::write(&target, SCENARIO_INPUT).unwrap();
    std::os::unix::fs::symlink(&target, project.config_path()).unwrap();

    assert!(stamp_on(&project, BuildDate::from_ymd(2025, 12, 6).unwrap()));

    let meta = std::fs::symlink_metadata(project.config_path()).unwrap();
    assert!(meta.file_type().is_symlink());
    assert_eq!(std::fs::read_to_string(&target).unwrap(), SCENARIO_OUTPUT);
}

#[test]
fn run_hosted_stamps_the_callers_project() {
    let project = FirmwareProject::with_config(SCENARIO_INPUT);
    let env = ProjectDir(Some(project.root().to_path_buf()));

    let days = around_today(|| run_hosted(Some(&env)));

    let content = project.config();
    assert!(
        days.iter().any(|d| content == format!("#define FIRMWARE_VERSION \"1.A0.3.{d}\"\n#define OTHER 5\n")),
        "unexpected content {content:?}"
    );
}

#[test]
fn run_hosted_swallows_failures() {
    let project = FirmwareProject::empty();
    let env = ProjectDir(Some(project.root().to_path_buf()));

    run_hosted(Some(&env));

    assert!(!project.config_path().exists());
}

fn surrounding_line() -> impl Strategy<Value = String> {
    "[a-z #_0-9]{0,24}".prop_filter("must not declare the version", |l| !l.contains("FIRMWARE_VERSION"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn only_the_date_field_changes(
        mcu in "[0-9]",
        variant in "[A-Z][0-9]",
        release in "[0-9]",
        old_date in "[0-9]{1,8}",
        before in prop::collection::vec(surrounding_line(), 0..4),
        after in prop::collection::vec(surrounding_line(), 0..4),
        (y, m, d) in (2000i32..2100, 1u32..=12, 1u32..=28),
    ) {
        let declaration = |value: &str| format!("#define FIRMWARE_VERSION \"{value}\"");
        let layout = |decl: String| {
            let mut lines = before.clone();
            lines.push(decl);
            lines.extend(after.iter().cloned());
            lines.join("\n") + "\n"
        };

        let project = FirmwareProject::with_config(&layout(declaration(&format!("{mcu}.{variant}.{release}.{old_date}"))));
        let date = BuildDate::from_ymd(y, m, d).unwrap();

        prop_assert!(stamp_on(&project, date));
        let expected = layout(declaration(&format!("{mcu}.{variant}.{release}.{date}")));
        prop_assert_eq!(project.config(), expected);
    }
}
