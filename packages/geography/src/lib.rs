#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static centroid coordinates for the 47 Japanese prefectures.
//!
//! The coordinate table is compile-time reference data: it never changes
//! at runtime and covers exactly the prefecture names used by the
//! population dataset. Lookups for any other name return `None` rather
//! than failing, so records for unmapped prefectures flow through the
//! rest of the system without coordinates.

/// The 47 prefecture names covered by [`coords`], in alphabetical order.
pub const PREFECTURES: &[&str] = &[
    "Aichi-ken",
    "Akita-ken",
    "Aomori-ken",
    "Chiba-ken",
    "Ehime-ken",
    "Fukui-ken",
    "Fukuoka-ken",
    "Fukushima-ken",
    "Gifu-ken",
    "Gunma-ken",
    "Hiroshima-ken",
    "Hokkaido",
    "Hyogo-ken",
    "Ibaraki-ken",
    "Ishikawa-ken",
    "Iwate-ken",
    "Kagawa-ken",
    "Kagoshima-ken",
    "Kanagawa-ken",
    "Kochi-ken",
    "Kumamoto-ken",
    "Kyoto-fu",
    "Mie-ken",
    "Miyagi-ken",
    "Miyazaki-ken",
    "Nagano-ken",
    "Nagasaki-ken",
    "Nara-ken",
    "Niigata-ken",
    "Oita-ken",
    "Okayama-ken",
    "Okinawa-ken",
    "Osaka-fu",
    "Saga-ken",
    "Saitama-ken",
    "Shiga-ken",
    "Shimane-ken",
    "Shizuoka-ken",
    "Tochigi-ken",
    "Tokushima-ken",
    "Tokyo-to",
    "Tottori-ken",
    "Toyama-ken",
    "Wakayama-ken",
    "Yamagata-ken",
    "Yamaguchi-ken",
    "Yamanashi-ken",
];

/// Returns the (latitude, longitude) centroid for a prefecture name.
///
/// Returns `None` for any name outside the 47-prefecture table.
#[must_use]
pub fn coords(prefecture: &str) -> Option<(f64, f64)> {
    match prefecture {
        "Aichi-ken" => Some((35.1802, 136.9066)),
        "Akita-ken" => Some((39.7199, 140.1024)),
        "Aomori-ken" => Some((40.8244, 140.7400)),
        "Chiba-ken" => Some((35.6073, 140.1062)),
        "Ehime-ken" => Some((33.8416, 132.7657)),
        "Fukui-ken" => Some((36.0652, 136.2216)),
        "Fukuoka-ken" => Some((33.5903, 130.4017)),
        "Fukushima-ken" => Some((37.7500, 140.4675)),
        "Gifu-ken" => Some((35.3912, 136.7222)),
        "Gunma-ken" => Some((36.3907, 139.0604)),
        "Hiroshima-ken" => Some((34.3853, 132.4553)),
        "Hokkaido" => Some((43.0646, 141.3469)),
        "Hyogo-ken" => Some((34.6901, 135.1956)),
        "Ibaraki-ken" => Some((36.3418, 140.4468)),
        "Ishikawa-ken" => Some((36.5947, 136.6256)),
        "Iwate-ken" => Some((39.7036, 141.1527)),
        "Kagawa-ken" => Some((34.3401, 134.0433)),
        "Kagoshima-ken" => Some((31.5602, 130.5581)),
        "Kanagawa-ken" => Some((35.4475, 139.6425)),
        "Kochi-ken" => Some((33.5597, 133.5311)),
        "Kumamoto-ken" => Some((32.7897, 130.7417)),
        "Kyoto-fu" => Some((35.0211, 135.7556)),
        "Mie-ken" => Some((34.7303, 136.5086)),
        "Miyagi-ken" => Some((38.2688, 140.8721)),
        "Miyazaki-ken" => Some((31.9111, 131.4239)),
        "Nagano-ken" => Some((36.6513, 138.1812)),
        "Nagasaki-ken" => Some((32.7448, 129.8736)),
        "Nara-ken" => Some((34.6853, 135.8327)),
        "Niigata-ken" => Some((37.9022, 139.0236)),
        "Oita-ken" => Some((33.2382, 131.6126)),
        "Okayama-ken" => Some((34.6617, 133.9350)),
        "Okinawa-ken" => Some((26.2124, 127.6809)),
        "Osaka-fu" => Some((34.6864, 135.5200)),
        "Saga-ken" => Some((33.2494, 130.2988)),
        "Saitama-ken" => Some((35.8569, 139.6489)),
        "Shiga-ken" => Some((35.0045, 135.8686)),
        "Shimane-ken" => Some((35.4723, 133.0505)),
        "Shizuoka-ken" => Some((34.9756, 138.3827)),
        "Tochigi-ken" => Some((36.5657, 139.8836)),
        "Tokushima-ken" => Some((34.0657, 134.5593)),
        "Tokyo-to" => Some((35.6895, 139.6917)),
        "Tottori-ken" => Some((35.5039, 134.2382)),
        "Toyama-ken" => Some((36.6953, 137.2113)),
        "Wakayama-ken" => Some((34.2260, 135.1675)),
        "Yamagata-ken" => Some((38.2404, 140.3633)),
        "Yamaguchi-ken" => Some((34.1859, 131.4714)),
        "Yamanashi-ken" => Some((35.6639, 138.5683)),
        _ => None,
    }
}
