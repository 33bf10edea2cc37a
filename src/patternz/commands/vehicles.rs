use crate::commands::CmdResult;
use crate::error::Result;
use crate::output::Output;
use crate::vehicles::{Shop, VehicleKind};

/// Assembles each kind in order with one shop and shows every product.
pub fn run(kinds: &[VehicleKind]) -> Result<CmdResult> {
    let shop = Shop::new();
    let mut out = Output::new();
    let mut vehicles = Vec::with_capacity(kinds.len());

    for kind in kinds {
        let mut builder = kind.builder();
        shop.construct(&mut *builder);
        builder.vehicle().show(&mut out)?;
        vehicles.push(builder.into_vehicle());
    }

    Ok(CmdResult::default()
        .with_output(out)
        .with_vehicles(vehicles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_order_assembles_four_vehicles() {
        let result = run(VehicleKind::demo_order()).unwrap();
        let types: Vec<_> = result.vehicles.iter().map(|v| v.vehicle_type()).collect();
        assert_eq!(types, vec!["Scooter", "Car", "MotorCycle", "Bus"]);
        assert_eq!(result.output.lines().len(), 4 * 7);
    }

    #[test]
    fn car_block_matches_table() {
        let result = run(&[VehicleKind::Car]).unwrap();
        assert_eq!(
            result.output.texts(),
            vec![
                "",
                "---------------------------",
                "Vehicle Type: Car",
                " Frame : Car Frame",
                " Engine : 2500 cc",
                " #Wheels: 4",
                " #Doors : 4",
            ]
        );
    }

    #[test]
    fn no_kinds_produces_nothing() {
        let result = run(&[]).unwrap();
        assert!(result.output.is_empty());
        assert!(result.vehicles.is_empty());
    }
}
