use anyhow::Result;
use crux_core::typegen::TypeGen;
use device_panel_core::{
    events::{NtpEvent, RfEvent, StatusEvent, UiEvent, WifiEvent},
    types::{Alert, ButtonState, Feature, FeatureState},
    App,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register feature event enums to ensure all variants are traced
    gen.register_type::<StatusEvent>()?;
    gen.register_type::<WifiEvent>()?;
    gen.register_type::<NtpEvent>()?;
    gen.register_type::<RfEvent>()?;
    gen.register_type::<UiEvent>()?;

    // View model building blocks
    gen.register_type::<Feature>()?;
    gen.register_type::<FeatureState>()?;
    gen.register_type::<ButtonState>()?;
    gen.register_type::<Alert>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
