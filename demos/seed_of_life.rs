//! This example builds the default seven-circle flower and a denser
//! twelve-petal variant, writing both as STL and SVG.

use rosette::{FlowerParams, MemoryScene, build_flower};
use std::{fs, path::Path};

const PATH: &str = "stl/seed_of_life";

fn main() {
    // Ensure the folder exists
    let _ = fs::create_dir_all(PATH);

    let mut scene = MemoryScene::new();

    build_flower(&mut scene, &FlowerParams::default()).unwrap();
    write_example(&scene, "seed_of_life");

    // Same scene, reset and rebuilt with smaller steps
    let dense = FlowerParams { angular_step: 30.0, ..Default::default() };
    build_flower(&mut scene, &dense).unwrap();
    write_example(&scene, "twelve_petals");
}

fn write_example(scene: &MemoryScene, name: &str) {
    let _ = fs::write(
        Path::new(PATH).join(name).with_extension("stl"),
        scene.to_stl_binary(name).unwrap(),
    );
    let _ = fs::write(
        Path::new(PATH).join(name).with_extension("svg"),
        scene.to_svg().unwrap(),
    );
}
