// crates/usecase/src/declaration.rs
use std::sync::OnceLock;

use fw_version_stamp_shared_kernel::{FirmwareVersion, VersionPrefix};
use regex::{NoExpand, Regex};

/// Template shown to operators when no declaration matches.
pub const VERSION_TEMPLATE: &str = "MCU.HW_VARIANT.RELEASE_TYPE.BUILD_DATE";
/// Example value shown alongside [`VERSION_TEMPLATE`].
pub const VERSION_EXAMPLE: &str = "1.A0.3.251206";

/// A template-conforming declaration found in the header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// The fields carried over into the new version.
    pub prefix: VersionPrefix,
    /// The quoted value as it currently appears, date included.
    pub value: &'a str,
}

fn template_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"#define FIRMWARE_VERSION "(([0-9])\.([A-Z][0-9])\.([0-9])\.[0-9]+)""#).unwrap()
    })
}

fn any_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"#define FIRMWARE_VERSION "[^"]*""#).unwrap())
}

/// Find the first declaration whose value follows the four-field template.
///
/// The date field only needs to be one or more digits here; it is discarded.
pub fn find(content: &str) -> Option<Declaration<'_>> {
    let caps = template_re().captures(content)?;
    let prefix = VersionPrefix::new(&caps[2], &caps[3], &caps[4]).ok()?;
    let value = caps.get(1)?.as_str();
    Some(Declaration { prefix, value })
}

/// Replace the quoted value of every `FIRMWARE_VERSION` declaration, whatever it
/// currently holds, with `version`.
pub fn rewrite(content: &str, version: &FirmwareVersion) -> String {
    let replacement = format!("#define FIRMWARE_VERSION \"{version}\"");
    any_value_re().replace_all(content, NoExpand(&replacement)).into_owned()
}
