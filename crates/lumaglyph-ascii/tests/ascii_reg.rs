//! Image to glyph conversion regression test
//!
//! Runs whole conversions on synthesized images and checks the layout,
//! palette and color properties of the result.

use lumaglyph_ascii::{
    AsciiError, CharSet, Effect, ExportFormat, HtmlTheme, Palette, Settings, convert,
    convert_bytes, render,
};
use lumaglyph_test::{RegParams, synth};

fn plain() -> Settings {
    Settings {
        width: 50,
        effects: Effect::None,
        adaptive: false,
        preserve_detail: false,
        char_set: CharSet::Classic,
        ..Default::default()
    }
}

#[test]
fn ascii_reg() {
    let mut rp = RegParams::new("ascii");

    // Uniform red through the byte entry point: luma 76 lands on '#'.
    let red = synth::solid_rgb(200, 80, (255, 0, 0)).unwrap();
    let bytes = synth::encode_png(&red).unwrap();
    let art = convert_bytes(&bytes, &plain()).unwrap();
    let text = art.text();
    let rows: Vec<&str> = text.split('\n').collect();
    rp.compare_values(11.0, rows.len() as f64, 0.0);
    for row in &rows {
        rp.compare_strings(row.as_bytes(), "#".repeat(50).as_bytes());
    }
    let stats = art.stats();
    rp.compare_values(11.0, stats.lines as f64, 0.0);
    rp.compare_values((11 * 50 + 10) as f64, stats.chars as f64, 0.0);
    rp.write_pix_for_display(art.processed(), "red_processed")
        .unwrap();

    // Reversal swaps '#' for its mirror ':'.
    let reversed = convert(
        &red,
        &Settings {
            reverse_colors: true,
            ..plain()
        },
    )
    .unwrap();
    rp.compare_strings(
        reversed.canvas().rows()[0].as_bytes(),
        ":".repeat(50).as_bytes(),
    );

    // A border adds two rules and four columns.
    let framed = convert(
        &red,
        &Settings {
            add_border: true,
            border_char: '+',
            ..plain()
        },
    )
    .unwrap();
    let framed_rows = framed.canvas().rows();
    rp.compare_values(13.0, framed_rows.len() as f64, 0.0);
    rp.compare_strings(framed_rows[0].as_bytes(), "+".repeat(54).as_bytes());
    rp.compare_strings(
        framed_rows[1].as_bytes(),
        format!("+ {} +", "#".repeat(50)).as_bytes(),
    );

    // Doubling and spacing widen every row to 4 * width - 1.
    let wide = convert(
        &red,
        &Settings {
            double_width: true,
            add_spacing: true,
            ..plain()
        },
    )
    .unwrap();
    for row in wide.canvas().rows() {
        rp.compare_values(199.0, row.chars().count() as f64, 0.0);
    }

    assert!(rp.cleanup());
}

#[test]
fn ascii_equalize_reg() {
    let mut rp = RegParams::new("ascii_equalize");

    // Equalization keeps the left-to-right order of a ramp.
    let ramp = synth::rgb_ramp(200, 40).unwrap();
    let settings = Settings {
        adaptive: true,
        aspect_correction: false,
        ..plain()
    };
    let art = convert(&ramp, &settings).unwrap();
    let palette = Palette::new(CharSet::Classic);
    let row = &art.canvas().rows()[5];
    let indices: Vec<usize> = row
        .chars()
        .map(|c| palette.index_of(c).unwrap())
        .collect();
    rp.compare_values(50.0, indices.len() as f64, 0.0);
    let ordered = indices.windows(2).all(|w| w[0] <= w[1]);
    rp.compare_values(1.0, ordered as u8 as f64, 0.0);
    rp.compare_values(9.0, indices[49] as f64, 0.0);
    rp.compare_values(0.0, indices[0] as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn ascii_background_reg() {
    let mut rp = RegParams::new("ascii_background");

    // With the background cut away, smart compositing fills it with the
    // complement of the subject's mean color.
    let disk = synth::disk_on_background(80, 80, 15.0, (20, 40, 60), (240, 240, 240)).unwrap();
    let settings = Settings {
        remove_bg: true,
        bg_threshold: 60,
        bg_feather: 0,
        color_ascii: true,
        aspect_correction: false,
        ..plain()
    };
    let art = convert(&disk, &settings).unwrap();
    let grid = art.colored().unwrap();
    rp.compare_values(50.0, grid.width() as f64, 0.0);
    rp.compare_values(50.0, grid.height() as f64, 0.0);
    let corner = grid.get(0, 0).unwrap().color.unwrap();
    rp.compare_values(235.0, corner.0 as f64, 0.0);
    rp.compare_values(215.0, corner.1 as f64, 0.0);
    rp.compare_values(195.0, corner.2 as f64, 0.0);
    let center = grid.get(25, 25).unwrap();
    rp.compare_values(20.0, center.color.unwrap().0 as f64, 0.0);
    // Luma 36 of 256 is the second glyph of ten.
    rp.compare_strings(center.ch.to_string().as_bytes(), b"%");
    rp.write_pix_for_display(art.processed(), "disk_processed")
        .unwrap();

    assert!(rp.cleanup());
}

#[test]
fn ascii_export_reg() {
    let mut rp = RegParams::new("ascii_export");

    let red = synth::solid_rgb(200, 80, (255, 0, 0)).unwrap();
    let settings = Settings {
        color_ascii: true,
        ..plain()
    };
    let art = convert(&red, &settings).unwrap();

    let html = render(&art, ExportFormat::Html, HtmlTheme::Retro, &settings);
    rp.compare_values(550.0, html.matches("<span").count() as f64, 0.0);
    rp.compare_values(11.0, html.matches("<br>").count() as f64, 0.0);
    rp.compare_values(1.0, html.contains("background: #000080") as u8 as f64, 0.0);
    rp.compare_values(
        1.0,
        html.contains("<span style=\"color:#ff0000;\">#</span>") as u8 as f64,
        0.0,
    );

    let ansi = render(&art, ExportFormat::Ansi, HtmlTheme::default(), &settings);
    rp.compare_values(550.0, ansi.matches("\x1b[38;2;255;0;0m#").count() as f64, 0.0);
    rp.compare_values(11.0, ansi.lines().count() as f64, 0.0);

    let md = render(&art, ExportFormat::Markdown, HtmlTheme::default(), &settings);
    rp.compare_values(1.0, md.starts_with("```text\n") as u8 as f64, 0.0);
    rp.compare_values(1.0, md.ends_with("\n```\n") as u8 as f64, 0.0);

    // Monochrome HTML is a single preformatted block.
    let mono = convert(&red, &plain()).unwrap();
    let page = render(&mono, ExportFormat::Html, HtmlTheme::Paper, &plain());
    rp.compare_values(0.0, page.matches("<span").count() as f64, 0.0);
    rp.compare_values(1.0, page.contains("<pre>#") as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn ascii_errors_reg() {
    let mut rp = RegParams::new("ascii_errors");

    let garbage = convert_bytes(b"\x00\x01\x02 not an image", &plain());
    rp.compare_values(
        1.0,
        matches!(garbage, Err(AsciiError::DecodeFailure(_))) as u8 as f64,
        0.0,
    );

    let empty = convert_bytes(&synth::bmp_header(0, 4), &plain());
    rp.compare_values(
        1.0,
        matches!(
            empty,
            Err(AsciiError::EmptySource {
                width: 0,
                height: 4
            })
        ) as u8 as f64,
        0.0,
    );

    let huge = convert_bytes(&synth::bmp_header(0x7fff_ffff, 0x7fff_ffff), &plain());
    rp.compare_values(
        1.0,
        matches!(huge, Err(AsciiError::DecodeFailure(_))) as u8 as f64,
        0.0,
    );

    let red = synth::solid_rgb(8, 8, (255, 0, 0)).unwrap();
    let too_wide = convert(
        &red,
        &Settings {
            width: 501,
            ..plain()
        },
    );
    rp.compare_values(
        1.0,
        matches!(too_wide, Err(AsciiError::InvalidSettings(_))) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup());
}

#[test]
fn ascii_concurrent_reg() {
    let mut rp = RegParams::new("ascii_concurrent");

    // Conversions share nothing; parallel runs match a serial run.
    let noise = synth::noise_rgb(120, 90, 11).unwrap();
    let settings = Settings {
        width: 60,
        color_ascii: true,
        ..Default::default()
    };
    let serial = convert(&noise, &settings).unwrap();

    let outputs: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| convert(&noise, &settings).unwrap().text()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for out in &outputs {
        rp.compare_strings(serial.text().as_bytes(), out.as_bytes());
    }

    assert!(rp.cleanup());
}
