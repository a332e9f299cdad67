//! Low-precision analytic ephemeris.
//!
//! Geocentric ecliptic positions from Keplerian mean orbital elements with
//! the principal lunar and giant-planet perturbation terms, after
//! P. Schlyter's formulation of the Van Flandern & Pulkkinen series. Good to
//! a few arc minutes for the planets and about a tenth of a degree for the
//! Moon over 1900-2100, which is ample for sign, house and aspect
//! classification.
//!
//! All angles are handled in degrees; helpers below keep the trig readable.

use chrono::{DateTime, Utc};

/// Bodies the engine computes, in traditional chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

/// Geocentric ecliptic state of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticState {
    /// Ecliptic longitude in degrees, [0, 360).
    pub lon: f64,
    /// Ecliptic latitude in degrees.
    pub lat: f64,
}

fn sind(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cosd(x: f64) -> f64 {
    x.to_radians().cos()
}

fn tand(x: f64) -> f64 {
    x.to_radians().tan()
}

fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Normalize an angle into [0, 360).
pub fn rev(deg: f64) -> f64 {
    let d = deg % 360.0;
    if d < 0.0 {
        d + 360.0
    } else {
        d
    }
}

/// Julian day for a UTC instant.
pub fn julian_day(when: DateTime<Utc>) -> f64 {
    when.timestamp_millis() as f64 / 86_400_000.0 + 2_440_587.5
}

/// Days since the series epoch (2000 Jan 0.0 UT = JD 2451543.5).
pub fn days_since_epoch(when: DateTime<Utc>) -> f64 {
    julian_day(when) - 2_451_543.5
}

/// Mean obliquity of the ecliptic, degrees.
pub fn obliquity(d: f64) -> f64 {
    23.4393 - 3.563e-7 * d
}

/// Greenwich mean sidereal time in degrees (Meeus, simplified).
pub fn gmst_deg(jd: f64) -> f64 {
    rev(280.460_618_37 + 360.985_647_366_29 * (jd - 2_451_545.0))
}

/// Equatorial declination for an ecliptic position, degrees.
pub fn declination(lon: f64, lat: f64, eps: f64) -> f64 {
    let x = cosd(lon) * cosd(lat);
    let y = sind(lon) * cosd(lat) * cosd(eps) - sind(lat) * sind(eps);
    let z = sind(lon) * cosd(lat) * sind(eps) + sind(lat) * cosd(eps);
    atan2d(z, (x * x + y * y).sqrt())
}

/// Keplerian mean elements at day `d`: longitude of the ascending node,
/// inclination, argument of perihelion, semi-major axis, eccentricity,
/// mean anomaly.
struct Elements {
    n: f64,
    i: f64,
    w: f64,
    a: f64,
    e: f64,
    m: f64,
}

fn elements(body: Body, d: f64) -> Elements {
    match body {
        Body::Sun => Elements {
            n: 0.0,
            i: 0.0,
            w: 282.9404 + 4.70935e-5 * d,
            a: 1.0,
            e: 0.016709 - 1.151e-9 * d,
            m: rev(356.0470 + 0.985_600_258_5 * d),
        },
        Body::Moon => Elements {
            n: 125.1228 - 0.052_953_808_3 * d,
            i: 5.1454,
            w: 318.0634 + 0.164_357_322_3 * d,
            a: 60.2666, // Earth radii
            e: 0.054900,
            m: rev(115.3654 + 13.064_992_950_9 * d),
        },
        Body::Mercury => Elements {
            n: 48.3313 + 3.24587e-5 * d,
            i: 7.0047 + 5.00e-8 * d,
            w: 29.1241 + 1.01444e-5 * d,
            a: 0.387098,
            e: 0.205635 + 5.59e-10 * d,
            m: rev(168.6562 + 4.092_334_436_8 * d),
        },
        Body::Venus => Elements {
            n: 76.6799 + 2.46590e-5 * d,
            i: 3.3946 + 2.75e-8 * d,
            w: 54.8910 + 1.38374e-5 * d,
            a: 0.723330,
            e: 0.006773 - 1.302e-9 * d,
            m: rev(48.0052 + 1.602_130_224_4 * d),
        },
        Body::Mars => Elements {
            n: 49.5574 + 2.11081e-5 * d,
            i: 1.8497 - 1.78e-8 * d,
            w: 286.5016 + 2.92961e-5 * d,
            a: 1.523688,
            e: 0.093405 + 2.516e-9 * d,
            m: rev(18.6021 + 0.524_020_776_6 * d),
        },
        Body::Jupiter => Elements {
            n: 100.4542 + 2.76854e-5 * d,
            i: 1.3030 - 1.557e-7 * d,
            w: 273.8777 + 1.64505e-5 * d,
            a: 5.20256,
            e: 0.048498 + 4.469e-9 * d,
            m: rev(19.8950 + 0.083_085_300_1 * d),
        },
        Body::Saturn => Elements {
            n: 113.6634 + 2.38980e-5 * d,
            i: 2.4886 - 1.081e-7 * d,
            w: 339.3939 + 2.97661e-5 * d,
            a: 9.55475,
            e: 0.055546 - 9.499e-9 * d,
            m: rev(316.9670 + 0.033_444_228_2 * d),
        },
        Body::Uranus => Elements {
            n: 74.0005 + 1.3978e-5 * d,
            i: 0.7733 + 1.9e-8 * d,
            w: 96.6612 + 3.0565e-5 * d,
            a: 19.18171 - 1.55e-8 * d,
            e: 0.047318 + 7.45e-9 * d,
            m: rev(142.5905 + 0.011_725_806 * d),
        },
        Body::Neptune => Elements {
            n: 131.7806 + 3.0173e-5 * d,
            i: 1.7700 - 2.55e-7 * d,
            w: 272.8461 - 6.027e-6 * d,
            a: 30.05826 + 3.313e-8 * d,
            e: 0.008606 + 2.15e-9 * d,
            m: rev(260.2471 + 0.005_995_147 * d),
        },
        // Pluto has no usable Keplerian elements; see pluto_state.
        Body::Pluto => unreachable!("Pluto uses a dedicated series"),
    }
}

/// Solve Kepler's equation iteratively; angles in degrees.
fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    let e_deg = e.to_degrees();
    let mut ea = m + e_deg * sind(m) * (1.0 + e * cosd(m));
    loop {
        let delta = (ea - e_deg * sind(ea) - m) / (1.0 - e * cosd(ea));
        ea -= delta;
        if delta.abs() < 0.0005 {
            return ea;
        }
    }
}

/// Heliocentric (geocentric for the Moon) rectangular ecliptic coordinates.
fn rectangular(el: &Elements) -> (f64, f64, f64) {
    let ea = eccentric_anomaly(el.m, el.e);
    let xv = el.a * (cosd(ea) - el.e);
    let yv = el.a * ((1.0 - el.e * el.e).sqrt() * sind(ea));
    let v = atan2d(yv, xv);
    let r = (xv * xv + yv * yv).sqrt();

    let u = v + el.w;
    let x = r * (cosd(el.n) * cosd(u) - sind(el.n) * sind(u) * cosd(el.i));
    let y = r * (sind(el.n) * cosd(u) + cosd(el.n) * sind(u) * cosd(el.i));
    let z = r * sind(u) * sind(el.i);
    (x, y, z)
}

/// Sun's geocentric ecliptic longitude and rectangular coordinates.
fn sun_position(d: f64) -> (f64, f64, f64, f64) {
    let el = elements(Body::Sun, d);
    let ea = eccentric_anomaly(el.m, el.e);
    let xv = cosd(ea) - el.e;
    let yv = (1.0 - el.e * el.e).sqrt() * sind(ea);
    let v = atan2d(yv, xv);
    let r = (xv * xv + yv * yv).sqrt();
    let lon = rev(v + el.w);
    (lon, r * cosd(lon), r * sind(lon), r)
}

fn moon_state(d: f64) -> EclipticState {
    let el = elements(Body::Moon, d);
    let (x, y, z) = rectangular(&el);
    let mut lon = rev(atan2d(y, x));
    let mut lat = atan2d(z, (x * x + y * y).sqrt());

    // Perturbation arguments.
    let sun = elements(Body::Sun, d);
    let ls = rev(sun.m + sun.w); // Sun's mean longitude
    let lm = rev(el.m + el.w + el.n); // Moon's mean longitude
    let ms = sun.m;
    let mm = el.m;
    let dd = rev(lm - ls); // mean elongation
    let f = rev(lm - el.n); // argument of latitude

    // Principal lunar perturbations in longitude...
    lon += -1.274 * sind(mm - 2.0 * dd) // evection
        + 0.658 * sind(2.0 * dd) // variation
        - 0.186 * sind(ms) // yearly equation
        - 0.059 * sind(2.0 * mm - 2.0 * dd)
        - 0.057 * sind(mm - 2.0 * dd + ms)
        + 0.053 * sind(mm + 2.0 * dd)
        + 0.046 * sind(2.0 * dd - ms)
        + 0.041 * sind(mm - ms)
        - 0.035 * sind(dd) // parallactic equation
        - 0.031 * sind(mm + ms)
        - 0.015 * sind(2.0 * f - 2.0 * dd)
        + 0.011 * sind(mm - 4.0 * dd);

    // ...and in latitude.
    lat += -0.173 * sind(f - 2.0 * dd)
        - 0.055 * sind(mm - f - 2.0 * dd)
        - 0.046 * sind(mm + f - 2.0 * dd)
        + 0.033 * sind(f + 2.0 * dd)
        + 0.017 * sind(2.0 * mm + f);

    EclipticState {
        lon: rev(lon),
        lat,
    }
}

/// Longitude perturbations for Jupiter, Saturn and Uranus, degrees.
fn giant_perturbations(body: Body, d: f64) -> f64 {
    let mj = rev(19.8950 + 0.083_085_300_1 * d);
    let ms = rev(316.9670 + 0.033_444_228_2 * d);
    let mu = rev(142.5905 + 0.011_725_806 * d);
    match body {
        Body::Jupiter => {
            -0.332 * sind(2.0 * mj - 5.0 * ms - 67.6)
                - 0.056 * sind(2.0 * mj - 2.0 * ms + 21.0)
                + 0.042 * sind(3.0 * mj - 5.0 * ms + 21.0)
                - 0.036 * sind(mj - 2.0 * ms)
                + 0.022 * cosd(mj - ms)
                + 0.023 * sind(2.0 * mj - 3.0 * ms + 52.0)
                - 0.016 * sind(mj - 5.0 * ms - 69.0)
        }
        Body::Saturn => {
            0.812 * sind(2.0 * mj - 5.0 * ms - 67.6)
                - 0.229 * cosd(2.0 * mj - 4.0 * ms - 2.0)
                + 0.119 * sind(mj - 2.0 * ms - 3.0)
                + 0.046 * sind(2.0 * mj - 6.0 * ms - 69.0)
                + 0.014 * sind(mj - 3.0 * ms + 32.0)
        }
        Body::Uranus => {
            0.040 * sind(ms - 2.0 * mu + 6.0)
                + 0.035 * sind(ms - 3.0 * mu + 33.0)
                - 0.015 * sind(mj - mu + 20.0)
        }
        _ => 0.0,
    }
}

/// Pluto from its dedicated periodic series (valid roughly 1900-2100).
fn pluto_state(d: f64) -> EclipticState {
    let s = 50.03 + 0.033_459_652 * d;
    let p = 238.95 + 0.003_968_789 * d;

    let lon_h = 238.9508 + 0.004_007_03 * d - 19.799 * sind(p) + 19.848 * cosd(p)
        + 0.897 * sind(2.0 * p)
        - 4.956 * cosd(2.0 * p)
        + 0.610 * sind(3.0 * p)
        + 1.211 * cosd(3.0 * p)
        - 0.341 * sind(4.0 * p)
        - 0.190 * cosd(4.0 * p)
        + 0.128 * sind(5.0 * p)
        - 0.034 * cosd(5.0 * p)
        - 0.038 * sind(6.0 * p)
        + 0.031 * cosd(6.0 * p)
        + 0.020 * sind(s - p)
        - 0.010 * cosd(s - p);
    let lat_h = -3.9082 - 5.453 * sind(p) - 14.975 * cosd(p)
        + 3.527 * sind(2.0 * p)
        + 1.673 * cosd(2.0 * p)
        - 1.051 * sind(3.0 * p)
        + 0.328 * cosd(3.0 * p)
        + 0.179 * sind(4.0 * p)
        - 0.292 * cosd(4.0 * p)
        + 0.019 * sind(5.0 * p)
        + 0.100 * cosd(5.0 * p)
        - 0.031 * sind(6.0 * p)
        - 0.026 * cosd(6.0 * p)
        + 0.011 * cosd(s - p);
    let r = 40.72 + 6.68 * sind(p) + 6.90 * cosd(p) - 1.18 * sind(2.0 * p) - 0.03 * cosd(2.0 * p)
        + 0.15 * sind(3.0 * p)
        - 0.14 * cosd(3.0 * p);

    // Heliocentric to geocentric.
    let xh = r * cosd(lon_h) * cosd(lat_h);
    let yh = r * sind(lon_h) * cosd(lat_h);
    let zh = r * sind(lat_h);
    let (_, xs, ys, _) = sun_position(d);

    let xg = xh + xs;
    let yg = yh + ys;
    EclipticState {
        lon: rev(atan2d(yg, xg)),
        lat: atan2d(zh, (xg * xg + yg * yg).sqrt()),
    }
}

/// Geocentric ecliptic state of a body at day `d`.
pub fn body_state(body: Body, d: f64) -> EclipticState {
    match body {
        Body::Sun => {
            let (lon, _, _, _) = sun_position(d);
            EclipticState { lon, lat: 0.0 }
        }
        Body::Moon => moon_state(d),
        Body::Pluto => pluto_state(d),
        planet => {
            let el = elements(planet, d);
            let (xh, yh, zh) = rectangular(&el);
            let lon_pert = giant_perturbations(planet, d);
            let r = (xh * xh + yh * yh + zh * zh).sqrt();
            let mut lon_h = rev(atan2d(yh, xh) + lon_pert);
            let lat_h = atan2d(zh, (xh * xh + yh * yh).sqrt());

            // Back to rectangular with the perturbed longitude, then
            // translate to the geocenter.
            let xp = r * cosd(lon_h) * cosd(lat_h);
            let yp = r * sind(lon_h) * cosd(lat_h);
            let zp = r * sind(lat_h);
            let (_, xs, ys, _) = sun_position(d);
            let xg = xp + xs;
            let yg = yp + ys;
            lon_h = rev(atan2d(yg, xg));
            EclipticState {
                lon: lon_h,
                lat: atan2d(zp, (xg * xg + yg * yg).sqrt()),
            }
        }
    }
}

/// Ecliptic longitude of the Midheaven for a given RAMC (local sidereal time
/// as an angle) and obliquity.
pub fn midheaven(ramc: f64, eps: f64) -> f64 {
    rev(atan2d(sind(ramc), cosd(ramc) * cosd(eps)))
}

/// Ecliptic longitude of the Ascendant for RAMC, obliquity and geographic
/// latitude.
pub fn ascendant(ramc: f64, eps: f64, lat: f64) -> f64 {
    rev(atan2d(
        cosd(ramc),
        -(sind(ramc) * cosd(eps) + tand(lat) * sind(eps)),
    ))
}
