//! Container build file and compose definition.
//!
//! The Dockerfile is emitted iff `docker`; the compose file iff
//! `docker_compose`. The compose service graph depends on `auth`: session
//! storage needs a cache service, and the app service gains a `depends_on`
//! edge to it.

use crate::domain::ProjectConfig;

use super::{Artifact, Section};

pub fn artifacts(config: &ProjectConfig) -> Vec<Artifact> {
    let features = config.features();
    let mut files = Vec::new();

    if features.docker {
        files.push(Artifact::new(
            Section::Containers,
            "Dockerfile",
            dockerfile(),
        ));
    }

    if features.docker_compose {
        files.push(Artifact::new(
            Section::Containers,
            "docker-compose.yml",
            compose(config),
        ));
    }

    files
}

/// Multi-stage build. Runs as the unprivileged `node` user and declares a
/// container-level health check against the health route.
fn dockerfile() -> String {
    "# syntax=docker/dockerfile:1\n\
     FROM node:22-alpine AS build\n\
     WORKDIR /app\n\
     COPY package.json ./\n\
     RUN npm install\n\
     COPY tsconfig.json ./\n\
     COPY src ./src\n\
     RUN npm run build && npm prune --omit=dev\n\
     \n\
     FROM node:22-alpine\n\
     ENV NODE_ENV=production\n\
     WORKDIR /app\n\
     COPY --from=build /app/node_modules ./node_modules\n\
     COPY --from=build /app/dist ./dist\n\
     COPY package.json ./\n\
     USER node\n\
     EXPOSE 3000\n\
     HEALTHCHECK --interval=30s --timeout=3s --retries=3 \\\n  \
     CMD wget -qO- http://127.0.0.1:3000/health || exit 1\n\
     CMD [\"node\", \"dist/server.js\"]\n"
        .to_string()
}

fn compose(config: &ProjectConfig) -> String {
    let auth = config.features().auth;
    let mut out = String::from(
        "services:\n  \
         app:\n    \
         build: .\n    \
         ports:\n      \
         - \"3000:3000\"\n    \
         env_file:\n      \
         - .env\n    \
         restart: unless-stopped\n",
    );

    if auth {
        out.push_str(
            "    depends_on:\n      \
             - cache\n  \
             cache:\n    \
             image: redis:7-alpine\n    \
             restart: unless-stopped\n",
        );
    }

    out
}

// ── tests ─────────────────────────────────────────────────────────────────────
