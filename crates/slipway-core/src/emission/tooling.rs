//! Static tooling configuration files.
//!
//! Everything here is fixed text except the environment template, whose
//! content set depends on `auth`/`observability`, and the git hooks, whose
//! runner prefix depends on the package manager.

use crate::domain::ProjectConfig;

use super::{Artifact, Section};

pub fn artifacts(config: &ProjectConfig) -> Vec<Artifact> {
    let mut files = vec![
        Artifact::new(Section::Tooling, "tsconfig.json", TSCONFIG),
        Artifact::new(Section::Tooling, "eslint.config.js", ESLINT_CONFIG),
        Artifact::new(Section::Tooling, ".prettierrc.json", PRETTIERRC),
        Artifact::new(Section::Tooling, ".gitignore", GITIGNORE),
    ];

    if config.features().docker {
        files.push(Artifact::new(Section::Tooling, ".dockerignore", DOCKERIGNORE));
    }

    files.push(Artifact::new(
        Section::Tooling,
        ".env.example",
        env_template(config),
    ));

    let exec = config.package_manager().exec_prefix();
    files.push(
        Artifact::new(
            Section::Tooling,
            ".husky/pre-commit",
            format!("{exec} lint-staged\n"),
        )
        .executable(),
    );
    files.push(
        Artifact::new(
            Section::Tooling,
            ".husky/commit-msg",
            format!("{exec} commitlint --edit \"$1\"\n"),
        )
        .executable(),
    );

    files.push(Artifact::new(
        Section::Tooling,
        ".lintstagedrc.json",
        LINTSTAGEDRC,
    ));
    files.push(Artifact::new(
        Section::Tooling,
        "commitlint.config.cjs",
        COMMITLINT_CONFIG,
    ));

    files
}

/// Environment-variable template. Baseline entries always; auth and
/// observability contribute their own blocks.
fn env_template(config: &ProjectConfig) -> String {
    let features = config.features();
    let mut out = String::from(
        "# Copy to .env and adjust per environment.\n\
         NODE_ENV=development\n\
         PORT=3000\n\
         LOG_LEVEL=info\n",
    );

    if features.auth {
        out.push_str(
            "\n# Authentication\n\
             JWT_SECRET=change-me\n\
             SESSION_TTL_SECONDS=3600\n\
             REDIS_URL=redis://localhost:6379\n",
        );
    }

    if features.observability {
        out.push_str(&format!(
            "\n# Observability\n\
             OTEL_SERVICE_NAME={}\n\
             OTEL_EXPORTER_OTLP_ENDPOINT=http://localhost:4318\n\
             METRICS_PORT=9464\n",
            config.name()
        ));
    }

    out
}

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "NodeNext",
    "moduleResolution": "NodeNext",
    "lib": ["ES2022"],
    "outDir": "dist",
    "rootDir": "src",
    "strict": true,
    "noUncheckedIndexedAccess": true,
    "exactOptionalPropertyTypes": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "declaration": true,
    "sourceMap": true
  },
  "include": ["src"],
  "exclude": ["node_modules", "dist"]
}
"#;

const ESLINT_CONFIG: &str = r#"import js from '@eslint/js';
import tseslint from 'typescript-eslint';

export default tseslint.config(
  { ignores: ['dist', 'coverage', 'node_modules'] },
  js.configs.recommended,
  ...tseslint.configs.recommended,
  {
    rules: {
      '@typescript-eslint/no-unused-vars': ['error', { argsIgnorePattern: '^_' }],
    },
  },
);
"#;

const PRETTIERRC: &str = r#"{
  "singleQuote": true,
  "trailingComma": "all",
  "printWidth": 100
}
"#;

const GITIGNORE: &str = "node_modules/\n\
dist/\n\
coverage/\n\
.env\n\
*.log\n";

const DOCKERIGNORE: &str = "node_modules\n\
dist\n\
coverage\n\
.git\n\
.env\n\
*.log\n";

const LINTSTAGEDRC: &str = r#"{
  "*.ts": ["eslint --fix", "prettier --write"],
  "*.{json,md,yml,yaml}": ["prettier --write"]
}
"#;

const COMMITLINT_CONFIG: &str =
    "module.exports = { extends: ['@commitlint/config-conventional'] };\n";

// ── tests ─────────────────────────────────────────────────────────────────────
