//! Generated documentation: usage guide and architecture guide.
//!
//! Sections are included per feature flag, and every command string is
//! rendered for the selected package manager rather than hardcoding npm.

use crate::domain::{CiProvider, ProjectConfig};

use super::{Artifact, Section};

pub fn artifacts(config: &ProjectConfig) -> Vec<Artifact> {
    vec![
        Artifact::new(Section::Docs, "README.md", readme(config)),
        Artifact::new(Section::Docs, "ARCHITECTURE.md", architecture(config)),
    ]
}

fn readme(config: &ProjectConfig) -> String {
    let name = config.name();
    let pm = config.package_manager();
    let features = config.features();

    let mut out = format!(
        "# {name}\n\n\
         Generated with slipway ({} tier).\n\n\
         ## Getting started\n\n\
         ```sh\n\
         {}\n\
         cp .env.example .env\n\
         {}\n\
         ```\n\n\
         The server listens on `http://localhost:3000`; `GET /health` reports liveness.\n\n\
         ## Scripts\n\n\
         | Command | Purpose |\n\
         | --- | --- |\n\
         | `{}` | Start with file watching |\n\
         | `{}` | Type-check and compile to `dist/` |\n\
         | `{}` | Run the test suite |\n\
         | `{}` | Lint the sources |\n",
        config.template(),
        pm.install_display(),
        pm.run_script("dev"),
        pm.run_script("dev"),
        pm.run_script("build"),
        pm.run_script("test"),
        pm.run_script("lint"),
    );

    if features.docker {
        out.push_str(&format!(
            "\n## Docker\n\n\
             ```sh\n\
             {}\n\
             {}\n\
             ```\n",
            pm.run_script("docker:build"),
            pm.run_script("docker:run"),
        ));
    }

    if features.docker_compose {
        out.push_str(&format!(
            "\n## Docker Compose\n\n\
             ```sh\n\
             {}\n\
             {}\n\
             ```\n",
            pm.run_script("compose:up"),
            pm.run_script("compose:down"),
        ));
        if features.auth {
            out.push_str("\nThe compose stack includes a Redis cache for session storage.\n");
        }
    }

    if features.openapi {
        out.push_str(
            "\n## API documentation\n\n\
             Interactive OpenAPI docs are served at `/docs` while the server is running.\n",
        );
    }

    if features.auth {
        out.push_str(
            "\n## Authentication\n\n\
             JWT-based authentication is wired in. Set `JWT_SECRET` in `.env` before starting.\n",
        );
    }

    if features.observability {
        out.push_str(
            "\n## Observability\n\n\
             Traces are exported over OTLP (`OTEL_EXPORTER_OTLP_ENDPOINT`) and Prometheus\n\
             metrics are exposed on `METRICS_PORT`.\n",
        );
    }

    match features.ci {
        CiProvider::Github => out.push_str(
            "\n## Continuous integration\n\n\
             GitHub Actions runs lint, tests, and the build on every push and pull request.\n",
        ),
        CiProvider::Gitlab => out.push_str(
            "\n## Continuous integration\n\n\
             GitLab CI runs lint, tests, and the build on every push.\n",
        ),
        CiProvider::None => {}
    }

    out
}

fn architecture(config: &ProjectConfig) -> String {
    let features = config.features();

    let mut out = String::from(
        "# Architecture\n\n\
         ## Layout\n\n\
         ```\n\
         src/\n  \
         server.ts     entry point: reads env, starts the HTTP listener\n  \
         app.ts        application factory: registers plugins and routes\n  \
         routes/       one module per resource\n\
         tests/          integration tests against the app factory\n\
         ```\n\n\
         The app factory keeps the HTTP listener separate from route\n\
         registration so tests can drive the application in-process.\n",
    );

    if features.auth {
        out.push_str(
            "\n## Authentication\n\n\
             `src/plugins/auth.ts` verifies JWTs from the `Authorization` header or the\n\
             session cookie. Protected routes declare the `auth` preHandler.\n",
        );
    }

    if features.openapi {
        out.push_str(
            "\n## OpenAPI\n\n\
             Route schemas double as the OpenAPI source of truth; the documentation UI\n\
             is generated from them at startup.\n",
        );
    }

    if features.observability {
        out.push_str(
            "\n## Observability\n\n\
             `src/telemetry/` configures OTLP trace export and a Prometheus metrics\n\
             endpoint. Request handlers stay free of instrumentation calls; hooks attach\n\
             spans and timings centrally.\n",
        );
    }

    if features.docker {
        out.push_str(
            "\n## Container image\n\n\
             The Dockerfile builds in two stages and ships only compiled output and\n\
             production dependencies. The runtime stage runs as the unprivileged `node`\n\
             user and exposes a container health check.\n",
        );
    }

    out
}

// ── tests ─────────────────────────────────────────────────────────────────────
