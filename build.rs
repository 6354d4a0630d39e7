//! Build script for the catalog gateway.
//!
//! Compiles the per-entity gRPC contracts under `proto/` with tonic-build so
//! the microservices and the gateway share one generated definition.

use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Rerun if proto files change
    println!("cargo:rerun-if-changed=proto/");

    compile_protos()?;

    Ok(())
}

/// Compile Protocol Buffer definitions for the entity services.
fn compile_protos() -> Result<(), Box<dyn std::error::Error>> {
    let proto_dir = PathBuf::from("proto");

    let proto_files = find_proto_files(&proto_dir)?;
    if proto_files.is_empty() {
        return Err("no .proto files found under proto/".into());
    }

    // Servers back the microservices, clients back the gateway.
    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&proto_files, &[proto_dir])?;

    Ok(())
}

/// Recursively find all .proto files in a directory.
fn find_proto_files(dir: &PathBuf) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut proto_files = Vec::new();

    if dir.is_dir() {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                proto_files.extend(find_proto_files(&path)?);
            } else if path.extension().is_some_and(|ext| ext == "proto") {
                proto_files.push(path);
            }
        }
    }

    proto_files.sort();
    Ok(proto_files)
}
