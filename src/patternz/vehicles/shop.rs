use super::VehicleBuilder;
use log::debug;

/// Runs the build steps in a fixed order: frame, engine, wheels, doors.
#[derive(Debug, Default, Clone, Copy)]
pub struct Shop;

impl Shop {
    pub fn new() -> Self {
        Self
    }

    pub fn construct(&self, builder: &mut dyn VehicleBuilder) {
        debug!("assembling {}", builder.vehicle().vehicle_type());
        builder.build_frame();
        builder.build_engine();
        builder.build_wheels();
        builder.build_doors();
    }
}
