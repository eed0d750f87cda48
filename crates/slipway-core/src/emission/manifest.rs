//! Dependency manifest (`package.json`) generation.
//!
//! The dependency and script sets are the union of a fixed baseline plus
//! feature-conditional additions. Versions are pinned as caret ranges so the
//! generated project resolves to current-but-compatible releases.

use serde_json::{Map, Value, json};

use crate::domain::ProjectConfig;

use super::{Artifact, Section};

pub fn artifact(config: &ProjectConfig) -> Artifact {
    let manifest = json!({
        "name": config.name(),
        "version": "0.1.0",
        "private": true,
        "type": "module",
        "engines": { "node": ">=20" },
        "scripts": scripts(config),
        "dependencies": dependencies(config),
        "devDependencies": dev_dependencies(),
    });

    let mut contents = serde_json::to_string_pretty(&manifest)
        .expect("manifest is valid JSON by construction");
    contents.push('\n');

    Artifact::new(Section::Manifest, "package.json", contents)
}

fn scripts(config: &ProjectConfig) -> Value {
    let features = config.features();
    let mut scripts = Map::new();
    let mut insert = |k: &str, v: String| {
        scripts.insert(k.to_string(), Value::String(v));
    };

    insert("dev", "tsx watch src/server.ts".into());
    insert("build", "tsc -p tsconfig.json".into());
    insert("start", "node dist/server.js".into());
    insert("test", "vitest run".into());
    insert("lint", "eslint .".into());
    insert("format", "prettier --write .".into());

    if features.docker {
        insert("docker:build", format!("docker build -t {} .", config.name()));
        insert(
            "docker:run",
            format!("docker run --rm -p 3000:3000 --env-file .env {}", config.name()),
        );
    }
    if features.docker_compose {
        insert("compose:up", "docker compose up --build -d".into());
        insert("compose:down", "docker compose down".into());
    }

    insert("prepare", "husky".into());

    Value::Object(scripts)
}

fn dependencies(config: &ProjectConfig) -> Value {
    let features = config.features();
    let mut deps = Map::new();
    let mut insert = |k: &str, v: &str| {
        deps.insert(k.to_string(), Value::String(v.to_string()));
    };

    // Baseline runtime stack.
    insert("fastify", "^5.2.0");
    insert("fastify-plugin", "^5.0.1");

    // Session/token handling.
    if features.auth {
        insert("@fastify/cookie", "^11.0.1");
        insert("@fastify/jwt", "^9.0.3");
    }

    // Served API documentation.
    if features.openapi {
        insert("@fastify/swagger", "^9.4.2");
        insert("@fastify/swagger-ui", "^5.2.1");
    }

    // Tracing and metrics.
    if features.observability {
        insert("@opentelemetry/api", "^1.9.0");
        insert("prom-client", "^15.1.3");
    }

    Value::Object(deps)
}

fn dev_dependencies() -> Value {
    json!({
        "@commitlint/cli": "^19.6.1",
        "@commitlint/config-conventional": "^19.6.0",
        "@eslint/js": "^9.18.0",
        "@types/node": "^22.10.5",
        "eslint": "^9.18.0",
        "husky": "^9.1.7",
        "lint-staged": "^15.3.0",
        "prettier": "^3.4.2",
        "tsx": "^4.19.2",
        "typescript": "^5.7.3",
        "typescript-eslint": "^8.19.1",
        "vitest": "^3.0.2",
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
