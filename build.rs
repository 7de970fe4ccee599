fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_file = "proto/manifest.proto";

    // Tell cargo to recompile if the proto file changes
    println!("cargo:rerun-if-changed={}", proto_file);

    tonic_build::configure()
        .build_server(false) // The search service lives on the host side
        .compile_protos(&[proto_file], &["proto"])?;

    Ok(())
}
