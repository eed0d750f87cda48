//! CI workflow generation.
//!
//! Emitted iff a CI provider was resolved. For GitHub the job graph depends
//! on `docker`: an image-build job is added that needs the test job and only
//! runs on the main branch.

use crate::domain::{CiProvider, PackageManager, ProjectConfig};

use super::{Artifact, Section};

pub fn artifacts(config: &ProjectConfig) -> Vec<Artifact> {
    match config.features().ci {
        CiProvider::Github => vec![Artifact::new(
            Section::Ci,
            ".github/workflows/ci.yml",
            github_workflow(config),
        )],
        CiProvider::Gitlab => vec![Artifact::new(
            Section::Ci,
            ".gitlab-ci.yml",
            gitlab_pipeline(config),
        )],
        CiProvider::None => vec![],
    }
}

fn github_workflow(config: &ProjectConfig) -> String {
    let pm = config.package_manager();
    let install = pm.install_display();
    let lint = pm.run_script("lint");
    let test = pm.run_script("test");
    let build = pm.run_script("build");

    let mut out = String::from(
        "name: ci\n\
         \n\
         on:\n  \
         push:\n    \
         branches: [main]\n  \
         pull_request:\n\
         \n\
         jobs:\n  \
         test:\n    \
         runs-on: ubuntu-latest\n    \
         steps:\n      \
         - uses: actions/checkout@v4\n",
    );
    out.push_str(&setup_steps(pm));
    out.push_str(&format!(
        "      - run: {install}\n      \
         - run: {lint}\n      \
         - run: {test}\n      \
         - run: {build}\n",
    ));

    if config.features().docker {
        out.push_str(&format!(
            "  docker-image:\n    \
             needs: test\n    \
             if: github.ref == 'refs/heads/main'\n    \
             runs-on: ubuntu-latest\n    \
             steps:\n      \
             - uses: actions/checkout@v4\n      \
             - run: docker build -t {} .\n",
            config.name()
        ));
    }

    out
}

/// Toolchain setup steps vary per package manager; pnpm and bun ship their
/// own setup actions.
fn setup_steps(pm: PackageManager) -> String {
    match pm {
        PackageManager::Npm => "      - uses: actions/setup-node@v4\n        \
             with:\n          \
             node-version: 22\n"
            .into(),
        PackageManager::Pnpm => "      - uses: pnpm/action-setup@v4\n      \
             - uses: actions/setup-node@v4\n        \
             with:\n          \
             node-version: 22\n"
            .into(),
        PackageManager::Yarn => "      - uses: actions/setup-node@v4\n        \
             with:\n          \
             node-version: 22\n      \
             - run: corepack enable\n"
            .into(),
        PackageManager::Bun => "      - uses: oven-sh/setup-bun@v2\n".into(),
    }
}

fn gitlab_pipeline(config: &ProjectConfig) -> String {
    let pm = config.package_manager();
    let install = pm.install_display();
    let lint = pm.run_script("lint");
    let test = pm.run_script("test");
    let build = pm.run_script("build");

    let prepare = match pm {
        PackageManager::Npm => String::new(),
        PackageManager::Pnpm | PackageManager::Yarn => "    - corepack enable\n".into(),
        PackageManager::Bun => "    - npm install -g bun\n".into(),
    };

    let mut out = format!(
        "image: node:22-alpine\n\
         \n\
         stages:\n  \
         - test\n\
         \n\
         test:\n  \
         stage: test\n  \
         script:\n\
         {prepare}    \
         - {install}\n    \
         - {lint}\n    \
         - {test}\n    \
         - {build}\n",
    );

    if config.features().docker {
        out = out.replace("stages:\n  - test\n", "stages:\n  - test\n  - package\n");
        out.push_str(&format!(
            "\ndocker-image:\n  \
             stage: package\n  \
             image: docker:27\n  \
             services:\n    \
             - docker:27-dind\n  \
             rules:\n    \
             - if: $CI_COMMIT_BRANCH == \"main\"\n  \
             script:\n    \
             - docker build -t {} .\n",
            config.name()
        ));
    }

    out
}

// ── tests ─────────────────────────────────────────────────────────────────────
