use exoplanet_atlas::coords::batch;
use exoplanet_atlas::coords::{
    EquatorialCoordinate, GalacticCoordinate, galactocentric_position,
    heliocentric_to_galactocentric_axes, sun_galactic_position, to_cartesian_from_galactic,
    to_equatorial, to_galactic,
};
use exoplanet_atlas::primitives::constants::{GALACTIC_POLE, SUN_GALACTIC};

/// Smallest separation between two longitudes, in degrees.
fn longitude_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn latitude_and_longitude_stay_in_range() {
    let mut ra = -180.0;
    while ra <= 540.0 {
        let mut dec = -89.5;
        while dec <= 89.5 {
            let g = to_galactic(ra, dec);
            assert!(
                (-90.0..=90.0).contains(&g.latitude_deg),
                "ra={ra} dec={dec}: b={}",
                g.latitude_deg
            );
            assert!(
                (0.0..360.0).contains(&g.longitude_deg),
                "ra={ra} dec={dec}: l={}",
                g.longitude_deg
            );
            dec += 4.5;
        }
        ra += 5.0;
    }
}

#[test]
fn galactic_center_direction_maps_near_origin() {
    // Sgr A*
    let g = to_galactic(266.405, -28.936);
    assert!(longitude_gap(g.longitude_deg, 0.0) < 1.0, "l = {}", g.longitude_deg);
    assert!(g.latitude_deg.abs() < 1.0, "b = {}", g.latitude_deg);

    let center = to_galactic(GALACTIC_POLE.center_ra_deg(), -28.936_17);
    assert!(longitude_gap(center.longitude_deg, 0.0) < 0.01);
    assert!(center.latitude_deg.abs() < 0.01);
}

#[test]
fn north_galactic_pole_has_latitude_ninety() {
    let g = to_galactic(GALACTIC_POLE.ra_deg(), GALACTIC_POLE.dec_deg());
    assert!((g.latitude_deg - 90.0).abs() < 1e-5, "b = {}", g.latitude_deg);
}

#[test]
fn celestial_pole_latitude_equals_pole_declination() {
    let g = to_galactic(0.0, 90.0);
    assert!((g.latitude_deg - GALACTIC_POLE.dec_deg()).abs() < 1e-9);
    let south = to_galactic(0.0, -90.0);
    assert!((south.latitude_deg + GALACTIC_POLE.dec_deg()).abs() < 1e-9);
}

#[test]
fn anticenter_lies_at_longitude_180() {
    // Direction opposite Sgr A* on the sky.
    let g = to_galactic(266.405 - 180.0, 28.936);
    assert!(longitude_gap(g.longitude_deg, 180.0) < 1.0, "l = {}", g.longitude_deg);
    assert!(g.latitude_deg.abs() < 1.0);
}

#[test]
fn inverse_rotation_recovers_equatorial_direction() {
    for (ra, dec) in [(10.0, 5.0), (83.82, -5.39), (201.3, 45.0), (350.0, -60.0)] {
        let g = to_galactic(ra, dec);
        let back = to_equatorial(g.longitude_deg, g.latitude_deg);
        assert!(longitude_gap(back.right_ascension_deg, ra) < 1e-8, "ra {ra} -> {back:?}");
        assert!((back.declination_deg - dec).abs() < 1e-8, "dec {dec} -> {back:?}");
    }
    let origin = GalacticCoordinate::new(0.0, 0.0).to_equatorial();
    assert!((origin.right_ascension_deg - 266.405).abs() < 0.01, "{origin:?}");
    assert!((origin.declination_deg + 28.936).abs() < 0.01, "{origin:?}");
}

#[test]
fn galactic_constructor_wraps_longitude() {
    assert!((GalacticCoordinate::new(-30.0, 0.0).longitude_deg - 330.0).abs() < 1e-12);
    assert!((GalacticCoordinate::new(725.0, 0.0).longitude_deg - 5.0).abs() < 1e-12);
    assert_eq!(GalacticCoordinate::new(-1e-18, 0.0).longitude_deg, 0.0);
}

#[test]
fn galactic_cartesian_axes() {
    let center = to_cartesian_from_galactic(0.0, 0.0, 2.0);
    assert!((center.x - 2.0).abs() < 1e-12 && center.y.abs() < 1e-12 && center.z.abs() < 1e-12);
    let rotation = to_cartesian_from_galactic(90.0, 0.0, 1.0);
    assert!(rotation.x.abs() < 1e-12 && (rotation.y - 1.0).abs() < 1e-12);
    let pole = to_cartesian_from_galactic(123.0, 90.0, 3.0);
    assert!((pole.z - 3.0).abs() < 1e-12);
    let p = to_cartesian_from_galactic(37.0, -12.0, 0.55);
    assert!((p.norm() - 0.55).abs() < 1e-12);
}

#[test]
fn sun_position_is_fixed() {
    let first = sun_galactic_position();
    let second = sun_galactic_position();
    assert_eq!(first, second);
    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert!((first.norm() - 8.3).abs() < 1e-12);
    assert!(first.x.abs() < 1e-12);
    assert!((first.y - 8.3).abs() < 1e-12);
    assert_eq!(first.z, 0.0);
    assert_eq!(SUN_GALACTIC.distance_kpc(), 8.3);
}

#[test]
fn galactocentric_position_is_offset_by_the_sun() {
    let sun = sun_galactic_position();
    let g = to_galactic(217.3934657, -62.6761821);
    // 1000 pc = 1 kpc away from the Sun
    let p = galactocentric_position(g, 1_000.0);
    let rel_norm = p.distance_to(sun);
    assert!((rel_norm - 1.0).abs() < 1e-9, "relative distance {rel_norm}");
}

#[test]
fn sagittarius_a_star_lands_on_the_galactic_centre() {
    let g = to_galactic(266.405, -28.936);
    let p = galactocentric_position(g, 8_300.0);
    assert!(p.norm() < 0.05, "Sgr A* at {p:?}");
}

#[test]
fn galactocentric_axes_follow_the_sun_direction() {
    // Toward the centre, halfway there.
    let p = galactocentric_position(GalacticCoordinate::new(0.0, 0.0), 4_150.0);
    assert!(p.x.abs() < 1e-9);
    assert!((p.y - 4.15).abs() < 1e-9);

    // Anticentre: directly away from the centre, beyond the Sun.
    let p = galactocentric_position(GalacticCoordinate::new(180.0, 0.0), 1_000.0);
    assert!(p.x.abs() < 1e-9);
    assert!((p.y - 9.3).abs() < 1e-9);

    // l = 90° is the direction of rotation, perpendicular to the Sun–centre line.
    let p = galactocentric_position(GalacticCoordinate::new(90.0, 0.0), 1_000.0);
    assert!((p.x - 1.0).abs() < 1e-9);
    assert!((p.y - 8.3).abs() < 1e-9);

    // North galactic pole keeps its height.
    let p = galactocentric_position(GalacticCoordinate::new(0.0, 90.0), 500.0);
    assert!((p.z - 0.5).abs() < 1e-9);
    assert!((p.y - 8.3).abs() < 1e-9);
}

#[test]
fn axis_rotation_preserves_length() {
    let v = to_cartesian_from_galactic(37.0, -12.0, 3.0);
    let r = heliocentric_to_galactocentric_axes(v);
    assert!((r.norm() - 3.0).abs() < 1e-12);
    assert_eq!(r.z, v.z);
    assert!((r.x - v.y).abs() < 1e-12);
    assert!((r.y + v.x).abs() < 1e-12);
}

#[test]
fn batch_conversion_matches_single_calls_in_order() {
    let coords: Vec<EquatorialCoordinate> = (0..64)
        .map(|i| EquatorialCoordinate::from_degrees(i as f64 * 5.5, -80.0 + i as f64 * 2.5))
        .collect();
    let galactic = batch::equatorial_to_galactic(&coords);
    assert_eq!(galactic.len(), coords.len());
    for (coord, g) in coords.iter().zip(&galactic) {
        assert_eq!(*g, coord.to_galactic());
    }

    let with_distance: Vec<(EquatorialCoordinate, f64)> =
        coords.iter().map(|c| (*c, 10.0)).collect();
    let positions = batch::equatorial_to_cartesian(&with_distance);
    for ((coord, d), p) in with_distance.iter().zip(&positions) {
        assert_eq!(*p, coord.to_cartesian(*d));
    }
}

#[test]
fn repeated_conversions_are_identical() {
    let a = to_galactic(123.4, -56.7);
    for _ in 0..10 {
        assert_eq!(to_galactic(123.4, -56.7), a);
    }
}
