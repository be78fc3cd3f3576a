use crate::dialect::Dialect;
use crate::functionalise::FunctionaliseOptions;

const PARIS_MRL: &str = "query(area(keyval('name','Paris'),keyval('is_in:country','France')),nwr(keyval('cuisine','japanese')),qtype(count))";
const PARIS_LIN: &str = "query@3 area@2 keyval@2 name@0 Paris@s keyval@2 is_in:country@0 France@s nwr@1 keyval@2 cuisine@0 japanese@s qtype@1 count@0";

#[test]
fn resolves_dialects_by_name() {
    assert_eq!(Dialect::from_name("nlmaps"), Some(Dialect::Nlmaps));
    assert_eq!(Dialect::from_name("generic"), Some(Dialect::Generic));
    assert_eq!(Dialect::from_name(""), Some(Dialect::Generic));
    assert_eq!(Dialect::from_name("geoquery"), None);
    assert_eq!(Dialect::Nlmaps.name(), "nlmaps");
}

#[test]
fn generic_only_normalises_whitespace() {
    assert_eq!(Dialect::Generic.preprocess("a  b\tc"), "a b c");
    assert_eq!(
        Dialect::Generic.functionalise("a@1 b@0", &FunctionaliseOptions::default()),
        "a@1 b@0"
    );
}

#[test]
fn nlmaps_preprocess_linearises() {
    assert_eq!(Dialect::Nlmaps.preprocess(PARIS_MRL), PARIS_LIN);
}

#[test]
fn nlmaps_preprocess_handles_interior_apostrophe() {
    assert_eq!(
        Dialect::Nlmaps.preprocess(
            "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','McDonald's')),qtype(count))"
        ),
        "query@3 area@2 keyval@2 name@0 Heidelberg@s keyval@2 de:place@0 city@s nwr@1 keyval@2 name@0 McDonaldSAVEAPOs@s qtype@1 count@0"
    );
}

#[test]
fn nlmaps_preprocess_handles_interior_brackets() {
    assert_eq!(
        Dialect::Nlmaps.preprocess(
            "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','M(c)Donalds')),qtype(count))"
        ),
        "query@3 area@2 keyval@2 name@0 Heidelberg@s keyval@2 de:place@0 city@s nwr@1 keyval@2 name@0 MBRACKETOPENcBRACKETCLOSEDonalds@s qtype@1 count@0"
    );
}

#[test]
fn nlmaps_preprocess_handles_interior_space() {
    assert_eq!(
        Dialect::Nlmaps.preprocess(
            "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','Mc Donalds')),qtype(count))"
        ),
        "query@3 area@2 keyval@2 name@0 Heidelberg@s keyval@2 de:place@0 city@s nwr@1 keyval@2 name@0 Mc\u{20ac}Donalds@s qtype@1 count@0"
    );
}

#[test]
fn nlmaps_preprocess_handles_interior_comma() {
    assert_eq!(
        Dialect::Nlmaps.preprocess(
            "query(area(keyval('name','Paris'),keyval('is_in:country','France')),nwr(keyval('cuisine','japanese,italian')),qtype(count))"
        ),
        "query@3 area@2 keyval@2 name@0 Paris@s keyval@2 is_in:country@0 France@s nwr@1 keyval@2 cuisine@0 japaneseSAVECOMMAitalian@s qtype@1 count@0"
    );
}

#[test]
fn nlmaps_preprocess_handles_deep_nesting() {
    assert_eq!(
        Dialect::Nlmaps.preprocess(
            "query(around(center(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','Yorckstraße'))),search(nwr(and(keyval('amenity','bank'),keyval('amenity','pharmacy')))),maxdist(DIST_INTOWN),topx(1)),qtype(latlong))"
        ),
        "query@2 around@4 center@2 area@2 keyval@2 name@0 Heidelberg@s keyval@2 de:place@0 city@s nwr@1 keyval@2 name@0 Yorckstraße@s search@1 nwr@1 and@2 keyval@2 amenity@0 bank@s keyval@2 amenity@0 pharmacy@s maxdist@1 DIST_INTOWN@0 topx@1 1@0 qtype@1 latlong@0"
    );
}

#[test]
fn nlmaps_preprocess_handles_or_values() {
    assert_eq!(
        Dialect::Nlmaps.preprocess(
            "query(area(keyval('name','Paris'),keyval('is_in:country','France')),nwr(keyval('amenity','restaurant'),keyval('cuisine',or('greek','italian'))),qtype(count))"
        ),
        "query@3 area@2 keyval@2 name@0 Paris@s keyval@2 is_in:country@0 France@s nwr@2 keyval@2 amenity@0 restaurant@s keyval@2 cuisine@0 or@2 greek@s italian@s qtype@1 count@0"
    );
}

#[test]
fn nlmaps_round_trips_exactly() {
    let queries = [
        PARIS_MRL,
        "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','McDonald's')),qtype(count))",
        "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','M(c)Donalds')),qtype(count))",
        "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','Mc Donalds')),qtype(count))",
        "query(area(keyval('name','Paris'),keyval('is_in:country','France')),nwr(keyval('cuisine','japanese,italian')),qtype(count))",
        "query(around(center(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','Yorckstraße'))),search(nwr(and(keyval('amenity','bank'),keyval('amenity','pharmacy')))),maxdist(DIST_INTOWN),topx(1)),qtype(latlong))",
        "query(area(keyval('name','Paris'),keyval('is_in:country','France')),nwr(keyval('amenity','restaurant'),keyval('cuisine',or('greek','italian'))),qtype(count))",
    ];
    for mrl in queries {
        let lin = Dialect::Nlmaps.preprocess(mrl);
        let back = Dialect::Nlmaps.functionalise(&lin, &FunctionaliseOptions::default());
        assert_eq!(back, mrl, "round trip failed for {lin}");
    }
}
