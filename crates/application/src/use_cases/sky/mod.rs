pub mod get_moon_phase;
pub mod get_sunrise_sunset;

pub use get_moon_phase::GetMoonPhaseUseCase;
pub use get_sunrise_sunset::GetSunriseSunsetUseCase;
