//! Conversion of raw catalog records into [`Extension`]s.

use crate::model::{BuildEntry, CuratedEntry, Extension};

/// Curated entries under this prefix are SpeedRunEthereum challenges, not extensions.
pub const CHALLENGES_REPO: &str = "https://github.com/scaffold-eth/se-2-challenges";

/// Normalize a curated entry.
pub fn from_curated(entry: CuratedEntry) -> Extension {
    let name = entry
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| entry.extension_flag_value.clone());

    let github = match entry.branch.as_deref().filter(|b| !b.is_empty()) {
        Some(branch) => format!("{}/tree/{}", entry.repository, branch),
        None => entry.repository.clone(),
    };

    let version = entry
        .version
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or("latest");

    Extension {
        name,
        description: entry.description,
        github,
        install_command: format!(
            "npx create-eth@{} -e {}",
            version, entry.extension_flag_value
        ),
        builder: None,
        co_builders: Vec::new(),
        youtube: None,
    }
}

/// Normalize a third-party build.
///
/// Returns `None` when the branch URL has no owner/repo segments.
pub fn from_build(entry: BuildEntry) -> Option<Extension> {
    let install_command = install_command_for(&entry.branch)?;

    Some(Extension {
        name: entry.name,
        description: entry.desc,
        github: entry.branch,
        install_command,
        builder: entry.builder.filter(|b| !b.is_empty()),
        co_builders: entry.co_builders.unwrap_or_default(),
        youtube: entry.video_url.filter(|v| !v.is_empty()),
    })
}

/// Derive the install command from a GitHub URL.
///
/// `https://github.com/<owner>/<repo>` installs `<owner>/<repo>`;
/// `https://github.com/<owner>/<repo>/tree/<branch>` installs `<owner>/<repo>:<branch>`.
fn install_command_for(url: &str) -> Option<String> {
    let parts: Vec<&str> = url.trim_end_matches('/').split('/').collect();

    let owner = parts.get(3).filter(|s| !s.is_empty())?;
    let repo = parts.get(4).filter(|s| !s.is_empty())?;

    let mut command = format!("npx create-eth@latest -e {owner}/{repo}");

    if parts.len() > 6 {
        command.push(':');
        command.push_str(&parts[6..].join("/"));
    }

    Some(command)
}

/// Extensions from partner organizations, listed after the curated ones.
pub fn featured_extensions() -> Vec<Extension> {
    vec![Extension {
        name: "Delegation Toolkit Extension".to_string(),
        description: "The MetaMask Delegation Toolkit is a Viem-based collection of tools for integrating embedded smart accounts, known as `MetaMaskSmartAccount`, into dapps. Developers can create and manage delegator accounts that delegate specific permissions, such as spending limits or time-based access, to other accounts. This extension demonstrates the end-to-end flow for initializing a MetaMask Smart Account, generating and signing a delegation, and redeeming the delegation according to [ERC-7710](https://eips.ethereum.org/EIPS/eip-7710) specifications.".to_string(),
        github: "https://github.com/MetaMask/gator-extension".to_string(),
        install_command: "npx create-eth@latest -e metamask/gator-extension".to_string(),
        builder: None,
        co_builders: Vec::new(),
        youtube: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curated(flag: &str, branch: Option<&str>, version: Option<&str>) -> CuratedEntry {
        CuratedEntry {
            extension_flag_value: flag.to_string(),
            repository: "https://github.com/scaffold-eth/create-eth-extensions".to_string(),
            branch: branch.map(str::to_string),
            description: "desc".to_string(),
            version: version.map(str::to_string),
            name: None,
        }
    }

    fn build(branch: &str) -> BuildEntry {
        BuildEntry {
            name: "Foo".to_string(),
            desc: "does foo".to_string(),
            branch: branch.to_string(),
            builder: Some("0xabc".to_string()),
            co_builders: None,
            video_url: Some(String::new()),
        }
    }

    #[test]
    fn curated_defaults() {
        let ext = from_curated(curated("ponder", None, None));

        assert_eq!(ext.name, "ponder");
        assert_eq!(ext.github, "https://github.com/scaffold-eth/create-eth-extensions");
        assert_eq!(ext.install_command, "npx create-eth@latest -e ponder");
        assert_eq!(ext.builder, None);
    }

    #[test]
    fn curated_with_branch_and_version() {
        let mut entry = curated("subgraph", Some("subgraph"), Some("0.0.60"));
        entry.name = Some("The Graph".to_string());

        let ext = from_curated(entry);

        assert_eq!(ext.name, "The Graph");
        assert_eq!(
            ext.github,
            "https://github.com/scaffold-eth/create-eth-extensions/tree/subgraph"
        );
        assert_eq!(ext.install_command, "npx create-eth@0.0.60 -e subgraph");
    }

    #[test]
    fn build_install_command_from_repo_url() {
        let ext = from_build(build("https://github.com/alice/foo-ext")).unwrap();

        assert_eq!(ext.install_command, "npx create-eth@latest -e alice/foo-ext");
        assert_eq!(ext.builder.as_deref(), Some("0xabc"));
        assert!(ext.co_builders.is_empty());
        assert_eq!(ext.youtube, None);
    }

    #[test]
    fn build_install_command_with_branch() {
        let ext = from_build(build("https://github.com/alice/foo-ext/tree/feature/x")).unwrap();
        assert_eq!(
            ext.install_command,
            "npx create-eth@latest -e alice/foo-ext:feature/x"
        );
    }

    #[test]
    fn drops_builds_without_repo() {
        assert_eq!(from_build(build("https://github.com/alice")), None);
        assert_eq!(from_build(build("not a url")), None);
    }

    #[test]
    fn featured_has_install_command() {
        let featured = featured_extensions();
        assert_eq!(featured.len(), 1);
        assert!(featured[0].install_command.contains("metamask/gator-extension"));
    }
}
