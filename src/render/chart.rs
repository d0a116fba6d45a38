//! SVG candlestick chart with a cost-basis reference line.
//!
//! - Each candle gets an equal-width slot
//! - Body: rect, green if close >= open, red otherwise
//! - Wick: vertical line from high to low
//! - Cost basis: dashed green horizontal line labelled "Your Buy Price"

use std::fmt::Write;

use crate::models::indicators::Candle;

pub const CHART_WIDTH: f64 = 1000.0;
pub const CHART_HEIGHT: f64 = 500.0;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 30.0;

const UP_COLOR: &str = "#26a69a";
const DOWN_COLOR: &str = "#ef5350";
const COST_BASIS_COLOR: &str = "green";

pub struct CandleChart<'a> {
    symbol: &'a str,
    candles: &'a [Candle],
    cost_basis: f64,
}

impl<'a> CandleChart<'a> {
    pub fn new(symbol: &'a str, candles: &'a [Candle], cost_basis: f64) -> Self {
        Self {
            symbol,
            candles,
            cost_basis,
        }
    }

    fn plot_height() -> f64 {
        CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn plot_width() -> f64 {
        CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    /// Price bounds covering every bar and the cost basis, padded by 5%.
    fn bounds(&self) -> (f64, f64) {
        let lows = self.candles.iter().map(|c| c.low);
        let highs = self.candles.iter().map(|c| c.high);
        let y_min = lows.fold(self.cost_basis, f64::min);
        let y_max = highs.fold(self.cost_basis, f64::max);
        let range = y_max - y_min;
        let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
        (y_min - pad, y_max + pad)
    }

    /// Map a price to an SVG y coordinate (0 = top).
    fn price_to_y(price: f64, y_lower: f64, y_upper: f64) -> f64 {
        if (y_upper - y_lower).abs() < 1e-9 {
            return MARGIN_TOP;
        }
        let frac = (price - y_lower) / (y_upper - y_lower);
        MARGIN_TOP + Self::plot_height() * (1.0 - frac)
    }

    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut svg);
        svg
    }

    fn write_svg(&self, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="100%" height="{h}">"#,
            w = CHART_WIDTH,
            h = CHART_HEIGHT
        )?;
        writeln!(
            out,
            r#"<text x="{x}" y="24" font-family="sans-serif" font-size="18">{title}</text>"#,
            x = MARGIN_LEFT,
            title = escape(&format!("{} Price Action", self.symbol))
        )?;

        if self.candles.is_empty() {
            writeln!(
                out,
                r#"<text x="{x}" y="{y}" font-family="sans-serif" fill="gray">No data</text>"#,
                x = MARGIN_LEFT,
                y = CHART_HEIGHT / 2.0
            )?;
            return out.write_str("</svg>\n");
        }

        let (y_lower, y_upper) = self.bounds();

        for (label, price) in [
            ("high", y_upper),
            ("mid", (y_upper + y_lower) / 2.0),
            ("low", y_lower),
        ] {
            writeln!(
                out,
                r#"<text class="axis-{label}" x="4" y="{y:.1}" font-family="sans-serif" font-size="11" fill="gray">{price:.1}</text>"#,
                y = Self::price_to_y(price, y_lower, y_upper) + 4.0,
            )?;
        }

        let slot = Self::plot_width() / self.candles.len() as f64;
        let body_width = (slot * 0.7).max(1.0);
        for (i, candle) in self.candles.iter().enumerate() {
            let color = if candle.is_bullish() { UP_COLOR } else { DOWN_COLOR };
            let center = MARGIN_LEFT + slot * (i as f64 + 0.5);
            let high_y = Self::price_to_y(candle.high, y_lower, y_upper);
            let low_y = Self::price_to_y(candle.low, y_lower, y_upper);
            let open_y = Self::price_to_y(candle.open, y_lower, y_upper);
            let close_y = Self::price_to_y(candle.close, y_lower, y_upper);
            let top = open_y.min(close_y);
            let height = (open_y - close_y).abs().max(1.0);

            writeln!(
                out,
                r#"<line class="wick" x1="{center:.2}" y1="{high_y:.2}" x2="{center:.2}" y2="{low_y:.2}" stroke="{color}"/>"#,
            )?;
            writeln!(
                out,
                r#"<rect class="candle" x="{x:.2}" y="{top:.2}" width="{body_width:.2}" height="{height:.2}" fill="{color}"><title>{ts} O:{o} H:{h} L:{l} C:{c}</title></rect>"#,
                x = center - body_width / 2.0,
                ts = candle.timestamp.format("%Y-%m-%d %H:%M"),
                o = candle.open,
                h = candle.high,
                l = candle.low,
                c = candle.close,
            )?;
        }

        let basis_y = Self::price_to_y(self.cost_basis, y_lower, y_upper);
        writeln!(
            out,
            r#"<line class="cost-basis" x1="{x1}" y1="{basis_y:.2}" x2="{x2}" y2="{basis_y:.2}" stroke="{COST_BASIS_COLOR}" stroke-dasharray="6 4"/>"#,
            x1 = MARGIN_LEFT,
            x2 = CHART_WIDTH - MARGIN_RIGHT,
        )?;
        writeln!(
            out,
            r#"<text x="{x}" y="{y:.2}" font-family="sans-serif" font-size="12" fill="{COST_BASIS_COLOR}" text-anchor="end">Your Buy Price</text>"#,
            x = CHART_WIDTH - MARGIN_RIGHT,
            y = basis_y - 4.0,
        )?;

        out.write_str("</svg>\n")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
