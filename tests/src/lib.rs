//! End-to-end checks across `geoquery-common` and `geoquery-core`.

#[cfg(test)]
mod scenarios;
#[cfg(test)]
mod util;
