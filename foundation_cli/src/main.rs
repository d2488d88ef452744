//! # Groundwork CLI Application
//!
//! Terminal front end for the foundation quantity calculator. Prompts for
//! the cleaning-pour and footing parameters, resolves soil and load values
//! from the built-in reference tables, and prints a formatted report plus
//! the JSON result for API/LLM use.

use std::io::{self, BufRead, Write};

use foundation_core::calculations::foundation::{calculate, FoundationInput};
use foundation_core::calculations::geometry::FootingShape;
use foundation_core::reference::tables;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Groundwork CLI - Foundation Quantity Calculator");
    println!("===============================================");
    println!();

    let refdata = tables::builtin();
    println!("Soils:          {}", refdata.soil_names().join(", "));
    println!("Building types: {}", refdata.building_types().join(", "));
    println!();

    let cleaning_length_m = prompt_f64("Cleaning pour length (m) [6.2]: ", 6.2);
    let cleaning_width_m = prompt_f64("Cleaning pour width (m) [6.2]: ", 6.2);
    let cleaning_height_m = prompt_f64("Cleaning pour height (m) [0.1]: ", 0.1);
    let floors = prompt_f64("Number of floors [2]: ", 2.0) as u32;
    let slab_area_m2 = prompt_f64("Slab area (m²) [100.0]: ", 100.0);
    let soil_type = prompt_str("Soil type [stiff clay]: ", "stiff clay");
    let building_type = prompt_str("Building type [residential]: ", "residential");
    let footing_height_m = prompt_f64("Footing height (m, or cm if > 5) [0.5]: ", 0.5);
    let footing_count = prompt_f64("Number of footings [4]: ", 4.0) as usize;
    let shape_raw = prompt_str("Footing shape (square/rectangular) [square]: ", "square");

    let footing_shape = match FootingShape::from_str_flexible(&shape_raw) {
        Ok(shape) => shape,
        Err(e) => {
            eprintln!("{} - using square", e);
            FootingShape::Square
        }
    };

    let input = FoundationInput {
        label: "CLI-Demo".to_string(),
        cleaning_length_m,
        cleaning_width_m,
        cleaning_height_m,
        floors,
        slab_area_m2,
        soil_type,
        building_type,
        footing_height_m,
        footing_count,
        footing_shape,
        similar_footings: true,
        footing_overrides: vec![],
    };

    println!();
    match calculate(&input, refdata) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  FOUNDATION CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Reference data:");
            println!(
                "  Bearing capacity: {:.1} kN/m² ({:.1}-{:.1}){}",
                result.bearing_capacity.value_kn_m2,
                result.bearing_capacity.min_kn_m2,
                result.bearing_capacity.max_kn_m2,
                if result.bearing_capacity.converted_from_mpa {
                    " [converted from MPa]"
                } else {
                    ""
                }
            );
            println!(
                "  Loads:            D={:.1} + L={:.1} = {:.1} kN/m²",
                result.loads.dead_kn_m2, result.loads.live_kn_m2, result.loads.total_kn_m2
            );
            println!();
            println!("Footings ({}, {}):", result.input.footing_count, result.input.footing_shape);
            println!("  Building load:  {:.1} kN", result.total_building_load_kn);
            println!(
                "  Required area:  {:.2} m² total, {:.2} m² each",
                result.total_footing_area_m2, result.area_per_footing_m2
            );
            println!(
                "  Dimensions:     {:.2} m × {:.2} m",
                result.footing_length_m, result.footing_width_m
            );
            println!();
            println!("Concrete:");
            println!("  Cleaning pour:  {:.3} m³", result.cleaning_volume_m3);
            println!(
                "  Footings:       {:.3} m³ total",
                result.footing_volumes.total_volume_m3
            );
            for entry in &result.footing_volumes.breakdown {
                println!(
                    "    {} × h={:.2} m -> {:.3} m³ each",
                    entry.footing_count, entry.height_m, entry.volume_m3
                );
            }
            println!();
            println!("═══════════════════════════════════════");
            println!("  {}", result.summary);
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(failure) => {
            eprintln!("Error: {}", failure);
            for error in &failure.errors {
                eprintln!("  - {}", error);
            }
            if let Ok(json) = serde_json::to_string_pretty(&failure) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
