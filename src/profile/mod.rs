pub(crate) mod accel_decel;
pub(crate) mod def;
pub(crate) mod extrapolate;
pub(crate) mod linear;
