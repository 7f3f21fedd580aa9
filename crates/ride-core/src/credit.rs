//! Distance credited to a ride participant.

/// Distance a participant is credited with, bonus included.
///
/// The participant's own distance and bonus override the ride values when
/// present. A 20% bonus on a 50 km ride credits 60 km.
pub fn final_distance_km(
    ride_distance_km: f64,
    actual_distance_km: Option<f64>,
    bonus_pct: f64,
    override_bonus_pct: Option<f64>,
) -> f64 {
    let distance = actual_distance_km.unwrap_or(ride_distance_km);
    let bonus = override_bonus_pct.unwrap_or(bonus_pct);
    distance * (1.0 + bonus / 100.0)
}
