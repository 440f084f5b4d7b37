//! Generated files that are not part of any template system.

/// File name of the generated version switch helper.
pub const SWITCH_SCRIPT_NAME: &str = "switch.sh";

/// Helper script written into every new environment.
///
/// `./switch.sh <version>` copies `Dockerfile.<version>` and
/// `docker-compose.<version>.yml` over the unversioned names.
pub const SWITCH_SCRIPT: &str = r#"#!/bin/bash

VERSION=$1

if [ -z "$VERSION" ]; then
    echo "Usage: ./switch.sh <version>"
    exit 1
fi

DOCKER_FILE="Dockerfile.$VERSION"
COMPOSE_FILE="docker-compose.$VERSION.yml"

if [ ! -f "$DOCKER_FILE" ]; then
    echo "Error: Dockerfile for version $VERSION not found"
    exit 1
fi

if [ ! -f "$COMPOSE_FILE" ]; then
    echo "Error: docker-compose file for version $VERSION not found"
    exit 1
fi

cp "$DOCKER_FILE" Dockerfile
cp "$COMPOSE_FILE" docker-compose.yml

echo "Switched to version $VERSION"
echo "Run 'docker compose up -d' to start the container"
"#;

/// Compose document written by `create <name>`.
pub fn custom_compose(name: &str) -> String {
    format!(
        "version: '3.8'\n\
         \n\
         services:\n\
         \x20 compile-env:\n\
         \x20   build:\n\
         \x20     context: .\n\
         \x20     dockerfile: Dockerfile.22.04\n\
         \x20   image: ubuntu-compile-env:{name}\n\
         \x20   container_name: dev-container-{name}\n\
         \x20   volumes:\n\
         \x20     - ../workspace:/workspace\n\
         \x20   working_dir: /workspace\n\
         \x20   stdin_open: true\n\
         \x20   tty: true\n"
    )
}
