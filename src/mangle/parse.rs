use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::UnitVec3;
use crate::mangle::polygon::{Cap, MangleMask, Polygon};

/// Fields of a `polygon <id> ( <n> caps, <w> weight, <p> pixel, <a> str):` line.
#[derive(Debug, PartialEq)]
struct PolygonHead {
    id: i64,
    caps: usize,
    weight: f64,
    pixel: Option<i64>,
    area_str: Option<f64>,
}

pub(crate) fn parse_mask(text: &str) -> MaskResult<MangleMask> {
    let mut polygons = Vec::new();
    let mut pixelization = None;
    let mut snapped = false;
    let mut balkanized = false;
    let mut declared: Option<(usize, usize)> = None;

    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    while let Some((line_no, line)) = lines.next() {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };

        match first {
            "polygon" => {
                let head = parse_polygon_head(line_no, line)?;
                let mut caps = Vec::with_capacity(head.caps);
                for _ in 0..head.caps {
                    let (cap_line_no, cap_line) = lines.next().ok_or_else(|| {
                        MaskError::parse(
                            line_no,
                            format!(
                                "polygon {} announces {} caps but the file ends early",
                                head.id, head.caps
                            ),
                        )
                    })?;
                    caps.push(parse_cap(cap_line_no, cap_line)?);
                }
                polygons.push(
                    Polygon::new(head.id, head.weight, caps)
                        .with_pixel(head.pixel)
                        .with_area(head.area_str),
                );
            }
            "pixelization" => {
                let scheme = tokens.next().ok_or_else(|| {
                    MaskError::parse(line_no, "pixelization line without a scheme")
                })?;
                pixelization = Some(scheme.to_string());
            }
            "snapped" => snapped = true,
            "balkanized" => balkanized = true,
            "real" | "unit" => {}
            _ => {
                if tokens.next() == Some("polygons") {
                    let n = first.parse::<usize>().map_err(|_| {
                        MaskError::parse(line_no, format!("invalid polygon count '{first}'"))
                    })?;
                    declared = Some((line_no, n));
                } else {
                    return Err(MaskError::parse(
                        line_no,
                        format!("unexpected line '{line}'"),
                    ));
                }
            }
        }
    }

    if let Some((line_no, n)) = declared
        && n != polygons.len()
    {
        return Err(MaskError::parse(
            line_no,
            format!(
                "header declares {n} polygons but {} were read",
                polygons.len()
            ),
        ));
    }

    let mut mask = MangleMask::new(polygons);
    mask.pixelization = pixelization;
    mask.snapped = snapped;
    mask.balkanized = balkanized;
    Ok(mask)
}

fn parse_polygon_head(line_no: usize, line: &str) -> MaskResult<PolygonHead> {
    let rest = line
        .strip_prefix("polygon")
        .ok_or_else(|| MaskError::parse(line_no, "expected 'polygon'"))?;
    let (id_part, fields) = rest
        .split_once('(')
        .ok_or_else(|| MaskError::parse(line_no, "polygon line without '('"))?;
    let fields = fields
        .split_once(')')
        .map(|(inner, _)| inner)
        .ok_or_else(|| MaskError::parse(line_no, "polygon line without ')'"))?;

    let id_text = id_part.trim();
    let id = id_text
        .parse::<i64>()
        .map_err(|_| MaskError::parse(line_no, format!("invalid polygon id '{id_text}'")))?;

    let mut caps = None;
    let mut weight = None;
    let mut pixel = None;
    let mut area_str = None;

    for field in fields.split(',') {
        let mut parts = field.split_whitespace();
        let (Some(value), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MaskError::parse(
                line_no,
                format!("malformed polygon field '{}'", field.trim()),
            ));
        };
        let bad = |what: &str| MaskError::parse(line_no, format!("invalid {what} '{value}'"));
        match name {
            "caps" | "cap" => caps = Some(value.parse::<usize>().map_err(|_| bad("cap count"))?),
            "weight" => weight = Some(parse_f64(value).ok_or_else(|| bad("weight"))?),
            "pixel" => pixel = Some(value.parse::<i64>().map_err(|_| bad("pixel"))?),
            "str" => area_str = Some(parse_f64(value).ok_or_else(|| bad("area"))?),
            other => {
                return Err(MaskError::parse(
                    line_no,
                    format!("unknown polygon field '{other}'"),
                ));
            }
        }
    }

    let caps = caps.ok_or_else(|| {
        MaskError::parse(line_no, format!("polygon {id} does not declare its cap count"))
    })?;

    Ok(PolygonHead {
        id,
        caps,
        weight: weight.unwrap_or(1.0),
        pixel,
        area_str,
    })
}

fn parse_cap(line_no: usize, line: &str) -> MaskResult<Cap> {
    let values = line
        .split_whitespace()
        .map(|tok| {
            parse_f64(tok)
                .ok_or_else(|| MaskError::parse(line_no, format!("invalid cap value '{tok}'")))
        })
        .collect::<MaskResult<Vec<f64>>>()?;

    let [x, y, z, cm] = values[..] else {
        return Err(MaskError::parse(
            line_no,
            format!("cap line needs 4 values, got {}", values.len()),
        ));
    };

    Cap::new(UnitVec3 { x, y, z }, cm).map_err(|e| MaskError::parse(line_no, e.to_string()))
}

fn parse_f64(tok: &str) -> Option<f64> {
    tok.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/mangle/parse.rs"]
mod tests;
