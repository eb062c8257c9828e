// micro:bit v2 edge connector. The Maker Line extension defaults are P1 for
// the analog output and P12..P16 for D1..D5.

#[cfg(feature = "analog")]
macro_rules! pinout {
    ($p:ident . line_an) => ($p.P0_03); // P1, AIN1
}

#[cfg(feature = "digital")]
macro_rules! pinout {
    ($p:ident . line_d1) => ($p.P0_12); // P12
    ($p:ident . line_d2) => ($p.P0_17); // P13
    ($p:ident . line_d3) => ($p.P0_01); // P14
    ($p:ident . line_d4) => ($p.P0_13); // P15
    ($p:ident . line_d5) => ($p.P1_02); // P16
}
