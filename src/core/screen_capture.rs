use std::path::PathBuf;
use image::{Rgb, RgbImage};
use crate::core::window::GameWindow;
use crate::settings::UiElement;

#[cfg(windows)]
use windows::Win32::Foundation::HWND;
#[cfg(windows)]
use windows::Win32::Graphics::Gdi::{
    BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject, GetDC, GetDIBits,
    ReleaseDC, SelectObject, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, DIB_RGB_COLORS, SRCCOPY,
};
#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

const COLOR_GREEN: Rgb<u8> = Rgb([0, 255, 0]);

/// Capture the primary screen using BitBlt
#[cfg(windows)]
pub fn capture_screen() -> Result<RgbImage, String> {
    unsafe {
        let width = GetSystemMetrics(SM_CXSCREEN);
        let height = GetSystemMetrics(SM_CYSCREEN);
        if width <= 0 || height <= 0 {
            return Err("Failed to get screen size".to_string());
        }

        let hdc = GetDC(HWND(0));
        if hdc.is_invalid() {
            return Err("Failed to get screen device context".to_string());
        }

        let mem_dc = CreateCompatibleDC(hdc);
        if mem_dc.is_invalid() {
            let _ = ReleaseDC(HWND(0), hdc);
            return Err("Failed to create compatible DC".to_string());
        }

        let bitmap = CreateCompatibleBitmap(hdc, width, height);
        if bitmap.is_invalid() {
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(HWND(0), hdc);
            return Err("Failed to create compatible bitmap".to_string());
        }

        let old_bitmap = SelectObject(mem_dc, bitmap);
        let blit = BitBlt(mem_dc, 0, 0, width, height, hdc, 0, 0, SRCCOPY);

        // 32 bits per pixel keeps rows 4-byte aligned without padding
        let mut bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0 as u32,
                biSizeImage: 0,
                biXPelsPerMeter: 0,
                biYPelsPerMeter: 0,
                biClrUsed: 0,
                biClrImportant: 0,
            },
            bmiColors: [Default::default(); 1],
        };

        let mut buffer: Vec<u8> = vec![0; (width * height * 4) as usize];
        let scan_lines = if blit.is_ok() {
            GetDIBits(
                mem_dc,
                bitmap,
                0,
                height as u32,
                Some(buffer.as_mut_ptr() as *mut _),
                &mut bmi,
                DIB_RGB_COLORS,
            )
        } else {
            0
        };

        let _ = SelectObject(mem_dc, old_bitmap);
        let _ = DeleteObject(bitmap);
        let _ = DeleteDC(mem_dc);
        let _ = ReleaseDC(HWND(0), hdc);

        if blit.is_err() {
            return Err("BitBlt failed - could not capture screen".to_string());
        }
        if scan_lines == 0 {
            return Err("Failed to get bitmap bits".to_string());
        }

        // BGRA -> RGB
        let pixels = buffer
            .chunks_exact(4)
            .flat_map(|bgra| [bgra[2], bgra[1], bgra[0]])
            .collect::<Vec<u8>>();

        RgbImage::from_raw(width as u32, height as u32, pixels)
            .ok_or_else(|| "Captured buffer has unexpected size".to_string())
    }
}

#[cfg(not(windows))]
pub fn capture_screen() -> Result<RgbImage, String> {
    Err("Screen capture is only supported on Windows".to_string())
}

/// Draw a 1px rectangle outline, clipped to the image
pub fn outline_rect(img: &mut RgbImage, rect: (i32, i32, i32, i32), color: Rgb<u8>) {
    let (x, y, w, h) = rect;
    let (img_w, img_h) = (img.width() as i32, img.height() as i32);
    let right = x + w;
    let bottom = y + h;

    let mut put = |px: i32, py: i32| {
        if px >= 0 && py >= 0 && px < img_w && py < img_h {
            img.put_pixel(px as u32, py as u32, color);
        }
    };

    for px in x..=right {
        put(px, y);
        put(px, bottom);
    }
    for py in y..=bottom {
        put(x, py);
        put(right, py);
    }
}

/// Screenshot with the OCR rectangle outlined, saved to the temp dir.
/// Works best with the game in borderless window mode.
pub fn save_region_preview(window_title: &str, element: &UiElement) -> Result<PathBuf, String> {
    let rect = element
        .as_rect()
        .ok_or_else(|| "OCR region has no width/height".to_string())?;

    // Allow a screenshot even if the game is not running
    let window = GameWindow::find(window_title);
    if let Some(window) = &window {
        window.bring_to_front();
        crate::automation::interaction::delay_ms(300);
    }

    let captured = capture_screen();
    if let Some(window) = &window {
        window.send_to_background();
    }
    let mut img = captured?;

    outline_rect(&mut img, rect, COLOR_GREEN);

    let path = std::env::temp_dir().join(format!(
        "hunt_showdown_trait_presets_screenshot_{}.png",
        uuid::Uuid::new_v4()
    ));
    img.save(&path)
        .map_err(|e| format!("Failed to save screenshot: {}", e))?;

    log::info!("Saved OCR region preview to {}", path.display());
    Ok(path)
}

/// Open a file with the system viewer
pub fn open_in_viewer(path: &std::path::Path) {
    #[cfg(windows)]
    let result = std::process::Command::new("explorer").arg(path).spawn();
    #[cfg(not(windows))]
    let result = std::process::Command::new("xdg-open").arg(path).spawn();

    if let Err(e) = result {
        log::warn!("Failed to open {}: {}", path.display(), e);
    }
}
