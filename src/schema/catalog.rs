// src/schema/catalog.rs
//
// Column layouts of the AT-HYG catalog releases.
// See https://github.com/astronexus/ATHYG-Database/blob/main/version-info.md

use super::record::athyg_record;

athyg_record! {
    /// A star from version 1 of the AT-HYG dataset (23 columns).
    V1 => V1 {
        id: u64,
        /// Tycho-2 identifier, kept as text (`"1234-5678-1"`).
        tyc: String,
        /// Gaia DR3 source id.
        gaia: u64,
        hyg: u64,
        hip: u64,
        hd: u64,
        hr: u64,
        /// Gliese catalog designation.
        gl: String,
        bayer: String,
        flam: String,
        con: String,
        proper: String,
        ra: f64,
        dec: f64,
        pos_src: String,
        dist: f64,
        x0: f64,
        y0: f64,
        z0: f64,
        dist_src: String,
        mag: f64,
        absmag: f64,
        mag_src: String,
    }
}

athyg_record! {
    /// A star from version 2 of the AT-HYG dataset (33 columns).
    V2 => V2 {
        id: u64,
        tyc: String,
        gaia: u64,
        hyg: u64,
        hip: u64,
        hd: u64,
        hr: u64,
        gl: String,
        bayer: String,
        flam: String,
        con: String,
        proper: String,
        ra: f64,
        dec: f64,
        pos_src: String,
        dist: f64,
        x0: f64,
        y0: f64,
        z0: f64,
        dist_src: String,
        mag: f64,
        absmag: f64,
        mag_src: String,
        rv: f64,
        rv_src: String,
        pm_ra: f64,
        pm_dec: f64,
        pm_src: f64,
        vx: f64,
        vy: f64,
        vz: f64,
        spect: f64,
        spect_src: String,
    }
}

athyg_record! {
    /// A star from version 3 of the AT-HYG dataset (34 columns).
    ///
    /// Same as [`V2`] with the colour index `ci` following `absmag`.
    V3 => V3 {
        id: u64,
        tyc: String,
        gaia: u64,
        hyg: u64,
        hip: u64,
        hd: u64,
        hr: u64,
        gl: String,
        bayer: String,
        flam: String,
        con: String,
        proper: String,
        ra: f64,
        dec: f64,
        pos_src: String,
        dist: f64,
        x0: f64,
        y0: f64,
        z0: f64,
        dist_src: String,
        mag: f64,
        absmag: f64,
        ci: f64,
        mag_src: String,
        rv: f64,
        rv_src: String,
        pm_ra: f64,
        pm_dec: f64,
        pm_src: f64,
        vx: f64,
        vy: f64,
        vz: f64,
        spect: f64,
        spect_src: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnKind, Record};

    fn names(cols: &[crate::schema::Column]) -> Vec<&'static str> {
        cols.iter().map(|c| c.name).collect()
    }

    #[test]
    fn v2_extends_v1() {
        assert_eq!(V1::ELEMENT_COUNT, 23);
        assert_eq!(V2::ELEMENT_COUNT, 33);
        assert_eq!(&V2::COLUMNS[..23], V1::COLUMNS);
        assert_eq!(
            names(&V2::COLUMNS[23..]),
            vec![
                "rv", "rv_src", "pm_ra", "pm_dec", "pm_src", "vx", "vy", "vz", "spect",
                "spect_src"
            ]
        );
    }

    #[test]
    fn v3_inserts_ci_after_absmag() {
        assert_eq!(V3::ELEMENT_COUNT, 34);
        assert_eq!(V3::COLUMNS[21].name, "absmag");
        assert_eq!(V3::COLUMNS[22].name, "ci");
        assert_eq!(V3::COLUMNS[22].kind, ColumnKind::Decimal);
        assert_eq!(V3::COLUMNS[23].name, "mag_src");

        let mut without_ci = V3::COLUMNS.to_vec();
        without_ci.remove(22);
        assert_eq!(without_ci.as_slice(), V2::COLUMNS);
    }

    #[test]
    fn kinds_follow_field_types() {
        let kinds: Vec<ColumnKind> = V1::COLUMNS.iter().map(|c| c.kind).collect();
        assert_eq!(kinds[0], ColumnKind::Unsigned);
        assert_eq!(kinds[1], ColumnKind::Text);
        assert!(kinds[2..7].iter().all(|k| *k == ColumnKind::Unsigned));
        assert!(kinds[7..12].iter().all(|k| *k == ColumnKind::Text));
        assert_eq!(kinds[12], ColumnKind::Decimal);
        assert_eq!(kinds[22], ColumnKind::Text);
    }

    #[test]
    fn values_follow_column_order() {
        let tokens: Vec<String> = (0..V1::ELEMENT_COUNT).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let star = V1::from_fields(&refs);

        let values = star.values();
        assert_eq!(values.len(), V1::ELEMENT_COUNT);
        for (value, column) in values.iter().zip(V1::COLUMNS) {
            assert_eq!(value.kind(), column.kind, "column {}", column.name);
            assert!(value.is_present());
        }
        assert_eq!(star.hr, Some(6));
        assert_eq!(star.gl.as_deref(), Some("7"));
        assert_eq!(star.mag_src.as_deref(), Some("22"));
    }
}
