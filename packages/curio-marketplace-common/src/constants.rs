pub const NATIVE_DENOM: &str = "ucurio";
