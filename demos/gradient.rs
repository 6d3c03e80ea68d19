use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use rgb_scale::{presets, ColorScale, RGBColor};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        let c = c.to_gray();
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

/// Sample the domain of `scale` at `n` points.
fn legend(fh: &mut impl Write, scale: &mut ColorScale, n: usize,
          width: u32, comment: &str) -> Result<(), Err> {
    let colors: Vec<_> = scale.range(n)
        .map(|(_, c)| RGB8::from_rgba(c))
        .collect();
    table_of_colors(fh, &colors, width, comment)
}


fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>rgb-scale: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Presets</h3>")?;
    for p in presets::all() {
        let mut scale = ColorScale::from_preset(p);
        let stops: Vec<_> = p.colors().iter()
            .map(|&c| RGB8::from_rgba(c)).collect();
        table_of_colors(&mut fh, &stops, 40,
                        &format!("{} ({} stops)", p.name(), stops.len()))?;
        legend(&mut fh, &mut scale, 150, 1, p.name())?;
    }

    writeln!(fh, "<h3>Stops</h3>")?;
    let mut scale = ColorScale::new(&[[0., 0., 0.], [255., 255., 255.]]);
    legend(&mut fh, &mut scale, 150, 1, "evenly spaced")?;
    scale.set_positions(Some(&[0., 0.75][..]));
    legend(&mut fh, &mut scale, 150, 1, "white from 0.75")?;

    writeln!(fh, "<h3>Classes</h3>")?;
    let mut scale = ColorScale::from_preset(&presets::VIRIDIS)
        .with_domain(&[0., 10., 20., 50., 100.]);
    legend(&mut fh, &mut scale, 101, 2, "4 classes on [0, 100]")?;
    for n in [3, 6, 9] {
        let edges: Vec<_> = (0 ..= n).map(|i| i as f64).collect();
        scale.set_domain(&edges);
        let colors: Vec<RGB8> = (0 .. n)
            .map(|i| scale.map_as(i as f64))
            .collect();
        table_of_colors(&mut fh, &colors, 40, &format!("{n} classes"))?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
