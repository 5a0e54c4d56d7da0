use crate::foundation::error::{FlyerError, FlyerResult};

/// Number of box passes used to approximate a Gaussian.
const GAUSSIAN_BOX_PASSES: usize = 3;

/// Separable box blur of premultiplied RGBA8 with edge clamping.
pub fn box_blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
) -> FlyerResult<Vec<u8>> {
    let expected_len = expected_len(width, height)?;
    if src.len() != expected_len {
        return Err(FlyerError::validation(
            "box_blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    horizontal_pass(src, &mut tmp, width, height, radius);
    vertical_pass(&tmp, &mut out, width, height, radius);
    Ok(out)
}

/// Gaussian blur approximated by three successive box blurs.
pub fn gaussian_blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f32,
) -> FlyerResult<Vec<u8>> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(FlyerError::validation("blur sigma must be finite and >= 0"));
    }
    let mut out = src.to_vec();
    for radius in box_radii_for_gaussian(sigma, GAUSSIAN_BOX_PASSES) {
        out = box_blur_rgba8_premul(&out, width, height, radius)?;
    }
    Ok(out)
}

/// Box radii whose successive application approximates a Gaussian of `sigma`.
pub(crate) fn box_radii_for_gaussian(sigma: f32, passes: usize) -> Vec<u32> {
    if sigma <= 0.0 || passes == 0 {
        return vec![0; passes];
    }
    let n = passes as f32;
    let w_ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut wl = w_ideal.floor() as i32;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wl = wl.max(1);
    let wu = wl + 2;

    let wlf = wl as f32;
    let m_ideal =
        (12.0 * sigma * sigma - n * wlf * wlf - 4.0 * n * wlf - 3.0 * n) / (-4.0 * wlf - 4.0);
    let m = m_ideal.round().clamp(0.0, n) as usize;

    (0..passes)
        .map(|i| {
            let size = if i < m { wl } else { wu };
            ((size - 1) / 2) as u32
        })
        .collect()
}

fn expected_len(width: u32, height: u32) -> FlyerResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| FlyerError::validation("blur buffer size overflow"))
}

/// Reciprocal of the window size in q16.
fn window_q16(radius: u32) -> u64 {
    (1u64 << 16) / u64::from(2 * radius + 1)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, radius: u32) {
    let w = width as i64;
    let r = i64::from(radius);
    let inv = window_q16(radius);
    for y in 0..height as usize {
        let row = y * width as usize * 4;
        let at = |x: i64, c: usize| -> u64 {
            u64::from(src[row + (x.clamp(0, w - 1) as usize) * 4 + c])
        };
        let mut acc = [0u64; 4];
        for c in 0..4 {
            acc[c] = (-r..=r).map(|x| at(x, c)).sum();
        }
        for x in 0..w {
            let out_idx = row + (x as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c] * inv);
                acc[c] = acc[c] + at(x + r + 1, c) - at(x - r, c);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, radius: u32) {
    let h = height as i64;
    let stride = width as usize * 4;
    let r = i64::from(radius);
    let inv = window_q16(radius);
    for x in 0..width as usize {
        let col = x * 4;
        let at = |y: i64, c: usize| -> u64 {
            u64::from(src[(y.clamp(0, h - 1) as usize) * stride + col + c])
        };
        let mut acc = [0u64; 4];
        for c in 0..4 {
            acc[c] = (-r..=r).map(|y| at(y, c)).sum();
        }
        for y in 0..h {
            let out_idx = (y as usize) * stride + col;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c] * inv);
                acc[c] = acc[c] + at(y + r + 1, c) - at(y - r, c);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
