fn main() {
    // The engine glue is pulled in with include_str!, which Cargo does not
    // always track. Watch it explicitly.
    println!("cargo:rerun-if-changed=src/grid_engine.js");
}
