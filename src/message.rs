//! Release embed assembly
//!
//! Pure construction of the outbound Discord embed from the configuration
//! and the formatted release note. No I/O happens here.

use crate::config::Config;
use crate::discord::{Embed, EmbedAuthor, EmbedField};

/// Embed accent color
pub const EMBED_COLOR: u32 = 0x001B_AF9C;

/// Author block shown on every announcement
const AUTHOR_NAME: &str = "GitHub Actions";
const AUTHOR_ICON_URL: &str = "https://avatars.githubusercontent.com/in/15368";

/// Zero-width space used for the spacer field between the changelog and the
/// download links
const SPACER: &str = "\u{200B}";

/// Platform label to artifact file suffix.
///
/// Declaration order determines the order of the download-link fields in the
/// embed; that ordering is part of the output contract.
pub const ARTIFACT_SUFFIXES: &[(&str, &str)] = &[
    ("macOS 英特尔芯片", "darwin_amd64"),
    ("macOS Apple 芯片", "darwin_arm64"),
    ("Linux AMD 64 位", "linux_amd64"),
    ("Linux ARM 64 位", "linux_arm64"),
    ("Linux ARMv6 芯片", "linux_armv6"),
    ("Linux ARMv7 芯片", "linux_armv7"),
    ("Windows AMD 64 位", "windows_amd64.exe"),
    ("Windows ARM 64 位", "windows_arm64.exe"),
];

/// Returns the download URL of the artifact with the given suffix
fn artifact_url(config: &Config, suffix: &str) -> String {
    format!(
        "{}/{}_{}",
        config.artifact_base_url, config.project_name, suffix
    )
}

/// Build the release announcement embed.
///
/// Field order is fixed: the changelog field, a zero-width spacer, then one
/// inline field per artifact-table entry in table order.
pub fn build_release_embed(config: &Config, release_note: &str) -> Embed {
    let mut fields = Vec::with_capacity(2 + ARTIFACT_SUFFIXES.len());

    fields.push(EmbedField {
        name: "**变更列表**".to_string(),
        value: release_note.to_string(),
        inline: false,
    });
    fields.push(EmbedField {
        name: SPACER.to_string(),
        value: SPACER.to_string(),
        inline: false,
    });

    for &(label, suffix) in ARTIFACT_SUFFIXES {
        fields.push(EmbedField {
            name: format!(":low_brightness: {label}"),
            value: format!(
                ":small_blue_diamond: [下载]({})",
                artifact_url(config, suffix)
            ),
            inline: true,
        });
    }

    Embed {
        title: format!(
            ":loudspeaker: {} {} 版本发布了！",
            config.project_name, config.tag
        ),
        url: config.release_url.clone(),
        color: EMBED_COLOR,
        author: EmbedAuthor {
            name: AUTHOR_NAME.to_string(),
            url: config.release_url.clone(),
            icon_url: AUTHOR_ICON_URL.to_string(),
        },
        fields,
    }
}
