use parkmatch_core::{haversine_meters, CanonicalPark, Coordinate, NearbyPark};

/// Ranks `parks` by great-circle distance from `origin`, nearest first,
/// keeping at most `limit` entries. Ties keep catalog order.
#[must_use]
pub fn rank_nearby(parks: &[CanonicalPark], origin: Coordinate, limit: usize) -> Vec<NearbyPark> {
    let mut ranked: Vec<NearbyPark> = parks
        .iter()
        .map(|park| NearbyPark {
            id: park.id,
            name: park.name.clone(),
            distance_meters: haversine_meters(origin, park.coordinate()),
            country: park.country.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    ranked.truncate(limit);
    ranked
}
