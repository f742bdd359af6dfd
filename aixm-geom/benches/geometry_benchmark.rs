use std::fmt::Write;
use std::hint::black_box;

use aixm_geom::geom::{arc, axis, Coordinate};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const POS_LIST: &str = "52.0 -32.0 52.5 -32.0 52.5 -31.5 52.0 -31.5 52.0 -32.0";

/// Benchmark the arc and circle synthesis
fn bench_arcs(c: &mut Criterion) {
    let center = Coordinate::new(-32.0, 52.0);

    c.bench_function("circle", |b| {
        b.iter(|| arc::circle(black_box(center), 9260.0, arc::CIRCLE_SEGMENTS))
    });

    c.bench_function("arc by center", |b| {
        let anchors = arc::Anchors {
            previous: Some(Coordinate::new(-31.9, 52.0)),
            next: Some(Coordinate::new(-32.0, 52.1)),
        };
        b.iter(|| arc::arc_by_center(black_box(center), 9260.0, 90.0, 0.0, anchors))
    });

    c.bench_function("arc through", |b| {
        b.iter(|| {
            arc::arc_through(
                black_box(Coordinate::new(0.0, 1.0)),
                black_box(Coordinate::new(0.7071, 0.7071)),
                black_box(Coordinate::new(1.0, 0.0)),
            )
        })
    });

    c.bench_function("pos list", |b| {
        b.iter(|| axis::parse_pos_list(black_box(POS_LIST), None, 2))
    });
}

/// Builds a message of `n` airspaces, each with a circle and a ring that
/// references a shared border.
fn message(n: usize) -> String {
    let mut xml = String::from(
        r#"<message:AIXMBasicMessage
          xmlns:aixm="http://www.aixm.aero/schema/5.1"
          xmlns:gml="http://www.opengis.net/gml/3.2"
          xmlns:message="http://www.aixm.aero/schema/5.1/message"
          xmlns:xlink="http://www.w3.org/1999/xlink">
          <message:hasMember>
            <aixm:GeoBorder gml:id="uuid.border">
              <aixm:timeSlice>
                <aixm:GeoBorderTimeSlice gml:id="GB1">
                  <aixm:border>
                    <aixm:Curve srsName="urn:ogc:def:crs:EPSG::4326">
                      <gml:segments>
                        <gml:GeodesicString>
                          <gml:posList>52.5 -32.0 52.5 -31.5 52.0 -31.5</gml:posList>
                        </gml:GeodesicString>
                      </gml:segments>
                    </aixm:Curve>
                  </aixm:border>
                </aixm:GeoBorderTimeSlice>
              </aixm:timeSlice>
            </aixm:GeoBorder>
          </message:hasMember>"#,
    );

    for i in 0..n {
        let _ = write!(
            xml,
            r##"<message:hasMember>
              <aixm:Airspace gml:id="uuid.arsp{i}">
                <aixm:timeSlice>
                  <aixm:AirspaceTimeSlice gml:id="ASE{i}">
                    <aixm:geometryComponent>
                      <aixm:AirspaceGeometryComponent>
                        <aixm:theAirspaceVolume>
                          <aixm:AirspaceVolume>
                            <aixm:horizontalProjection>
                              <aixm:Surface srsName="urn:ogc:def:crs:EPSG::4326">
                                <gml:patches>
                                  <gml:PolygonPatch>
                                    <gml:exterior>
                                      <gml:Ring>
                                        <gml:curveMember>
                                          <gml:Curve>
                                            <gml:segments>
                                              <gml:GeodesicString>
                                                <gml:posList>52.0 -32.0 52.5 -32.0</gml:posList>
                                              </gml:GeodesicString>
                                            </gml:segments>
                                          </gml:Curve>
                                        </gml:curveMember>
                                        <gml:curveMember xlink:href="#uuid.border"/>
                                      </gml:Ring>
                                    </gml:exterior>
                                  </gml:PolygonPatch>
                                  <gml:PolygonPatch>
                                    <gml:exterior>
                                      <gml:Ring>
                                        <gml:curveMember>
                                          <gml:Curve>
                                            <gml:segments>
                                              <gml:CircleByCenterPoint>
                                                <gml:pos>54.0 -30.0</gml:pos>
                                                <gml:radius uom="NM">5</gml:radius>
                                              </gml:CircleByCenterPoint>
                                            </gml:segments>
                                          </gml:Curve>
                                        </gml:curveMember>
                                      </gml:Ring>
                                    </gml:exterior>
                                  </gml:PolygonPatch>
                                </gml:patches>
                              </aixm:Surface>
                            </aixm:horizontalProjection>
                          </aixm:AirspaceVolume>
                        </aixm:theAirspaceVolume>
                      </aixm:AirspaceGeometryComponent>
                    </aixm:geometryComponent>
                  </aixm:AirspaceTimeSlice>
                </aixm:timeSlice>
              </aixm:Airspace>
            </message:hasMember>"##
        );
    }

    xml.push_str("</message:AIXMBasicMessage>");
    xml
}

/// Benchmark parsing a document of airspaces
fn bench_parse(c: &mut Criterion) {
    let data = message(100);
    let mut group = c.benchmark_group("document");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("borders", |b| {
        b.iter(|| aixm_geom::BorderRegistry::scan(black_box(data.as_bytes())))
    });

    group.bench_function("parse", |b| {
        b.iter(|| {
            let model = aixm_geom::parse(black_box(data.as_bytes())).expect("message should parse");
            black_box(model.airspaces.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_arcs, bench_parse);
criterion_main!(benches);
