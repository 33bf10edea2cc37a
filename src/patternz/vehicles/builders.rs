use super::{Vehicle, DOORS, ENGINE, FRAME, WHEELS};

/// One step per part. Each builder owns the vehicle it is filling in.
pub trait VehicleBuilder {
    fn build_frame(&mut self);

    fn build_engine(&mut self);

    fn build_wheels(&mut self);

    fn build_doors(&mut self);

    fn vehicle(&self) -> &Vehicle;

    fn into_vehicle(self: Box<Self>) -> Vehicle;
}

pub struct ScooterBuilder {
    vehicle: Vehicle,
}

impl ScooterBuilder {
    pub fn new() -> Self {
        Self {
            vehicle: Vehicle::new("Scooter"),
        }
    }
}

impl Default for ScooterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleBuilder for ScooterBuilder {
    fn build_frame(&mut self) {
        self.vehicle.set_part(FRAME, "Scooter Frame");
    }

    fn build_engine(&mut self) {
        self.vehicle.set_part(ENGINE, "50 cc");
    }

    fn build_wheels(&mut self) {
        self.vehicle.set_part(WHEELS, "2");
    }

    fn build_doors(&mut self) {
        self.vehicle.set_part(DOORS, "0");
    }

    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn into_vehicle(self: Box<Self>) -> Vehicle {
        self.vehicle
    }
}

pub struct MotorcycleBuilder {
    vehicle: Vehicle,
}

impl MotorcycleBuilder {
    pub fn new() -> Self {
        Self {
            vehicle: Vehicle::new("MotorCycle"),
        }
    }
}

impl Default for MotorcycleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleBuilder for MotorcycleBuilder {
    fn build_frame(&mut self) {
        self.vehicle.set_part(FRAME, "MotorCycle Frame");
    }

    fn build_engine(&mut self) {
        self.vehicle.set_part(ENGINE, "500 cc");
    }

    fn build_wheels(&mut self) {
        self.vehicle.set_part(WHEELS, "2");
    }

    fn build_doors(&mut self) {
        self.vehicle.set_part(DOORS, "0");
    }

    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn into_vehicle(self: Box<Self>) -> Vehicle {
        self.vehicle
    }
}

pub struct CarBuilder {
    vehicle: Vehicle,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self {
            vehicle: Vehicle::new("Car"),
        }
    }
}

impl Default for CarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleBuilder for CarBuilder {
    fn build_frame(&mut self) {
        self.vehicle.set_part(FRAME, "Car Frame");
    }

    fn build_engine(&mut self) {
        self.vehicle.set_part(ENGINE, "2500 cc");
    }

    fn build_wheels(&mut self) {
        self.vehicle.set_part(WHEELS, "4");
    }

    fn build_doors(&mut self) {
        self.vehicle.set_part(DOORS, "4");
    }

    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn into_vehicle(self: Box<Self>) -> Vehicle {
        self.vehicle
    }
}

pub struct BusBuilder {
    vehicle: Vehicle,
}

impl BusBuilder {
    pub fn new() -> Self {
        Self {
            vehicle: Vehicle::new("Bus"),
        }
    }
}

impl Default for BusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleBuilder for BusBuilder {
    fn build_frame(&mut self) {
        self.vehicle.set_part(FRAME, "Bus Frame");
    }

    fn build_engine(&mut self) {
        self.vehicle.set_part(ENGINE, "2000 cc");
    }

    fn build_wheels(&mut self) {
        self.vehicle.set_part(WHEELS, "4");
    }

    fn build_doors(&mut self) {
        self.vehicle.set_part(DOORS, "2");
    }

    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn into_vehicle(self: Box<Self>) -> Vehicle {
        self.vehicle
    }
}
