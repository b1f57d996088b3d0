// Spinning image viewer.
//
// The decoded image is uploaded once as a texture and redrawn every frame as a
// quad placed at the window center under the live transform. The transform
// advances one `Spin` tick per configured interval, and its rows are printed
// below the image.
//
// When the `viewer` feature is disabled, `show` is a no-op.

#[cfg(feature = "viewer")]
mod imp {
    use crate::config::ViewerConfig;
    use crate::im::{RgbIm, RgbaIm};
    use crate::mat2::Mat2;
    use crate::transform::{quad_corners, Spin};
    use crate::vec::Vec2;
    use eframe::egui;
    use log::info;
    use std::time::{Duration, Instant};

    pub fn show(im: &RgbIm, config: &ViewerConfig) -> Result<(), String> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(egui::vec2(config.window_size[0], config.window_size[1])),
            ..Default::default()
        };

        let rgba = im.to_rgba_im();
        let config = config.clone();
        let window_title = config.title.clone();
        info!(
            "opening viewer: {}x{} image, {} deg every {} ms",
            rgba.w, rgba.h, config.step_degrees, config.interval_ms
        );

        eframe::run_native(
            &window_title,
            options,
            Box::new(move |_cc| Ok(Box::new(SpinApp::new(rgba, &config)))),
        )
        .map_err(|e| e.to_string())
    }

    struct SpinApp {
        rgba: RgbaIm,
        spin: Spin,
        matrix: Mat2,
        interval: Duration,
        matrix_decimals: u32,
        last_tick: Instant,
        texture: Option<egui::TextureHandle>,
    }

    impl SpinApp {
        fn new(rgba: RgbaIm, config: &ViewerConfig) -> Self {
            let spin = config.spin();
            Self {
                rgba,
                matrix: spin.matrix(),
                spin,
                interval: config.interval(),
                matrix_decimals: config.matrix_decimals,
                last_tick: Instant::now(),
                texture: None,
            }
        }

        fn texture_id(&mut self, ctx: &egui::Context) -> egui::TextureId {
            let rgba = &self.rgba;
            self.texture
                .get_or_insert_with(|| {
                    let img = egui::ColorImage::from_rgba_unmultiplied([rgba.w, rgba.h], &rgba.arr);
                    ctx.load_texture("ppm", img, egui::TextureOptions::NEAREST)
                })
                .id()
        }

        fn advance(&mut self) {
            let now = Instant::now();
            while now.duration_since(self.last_tick) >= self.interval {
                self.matrix = self.spin.tick();
                self.last_tick += self.interval;
            }
        }

        fn spun_mesh(&self, tex: egui::TextureId, center: egui::Pos2) -> egui::Mesh {
            let corners = quad_corners(
                self.rgba.w as f64,
                self.rgba.h as f64,
                Vec2::new(center.x as f64, center.y as f64),
                &self.matrix,
            );
            let uvs = [
                egui::pos2(0.0, 0.0),
                egui::pos2(1.0, 0.0),
                egui::pos2(1.0, 1.0),
                egui::pos2(0.0, 1.0),
            ];

            let mut mesh = egui::Mesh::with_texture(tex);
            for (corner, uv) in corners.iter().zip(uvs) {
                mesh.vertices.push(egui::epaint::Vertex {
                    pos: egui::pos2(corner.x as f32, corner.y as f32),
                    uv,
                    color: egui::Color32::WHITE,
                });
            }
            mesh.add_triangle(0, 1, 2);
            mesh.add_triangle(0, 2, 3);
            mesh
        }
    }

    impl eframe::App for SpinApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            self.advance();
            let tex = self.texture_id(ctx);

            egui::TopBottomPanel::bottom("matrix").show(ctx, |ui| {
                let [row1, row2] = self.matrix.display_rows(self.matrix_decimals);
                ui.monospace(row1);
                ui.monospace(row2);
                ui.monospace(format!("angle={:.0}", self.spin.angle()));
            });

            egui::CentralPanel::default().show(ctx, |ui| {
                let center = ui.max_rect().center();
                let mesh = self.spun_mesh(tex, center);
                ui.painter().add(egui::Shape::mesh(mesh));
            });

            let until_next = self.interval.saturating_sub(self.last_tick.elapsed());
            ctx.request_repaint_after(until_next);
        }
    }
}

/// No-op implementation when the viewer feature is disabled.
#[cfg(not(feature = "viewer"))]
mod imp {
    use crate::config::ViewerConfig;
    use crate::im::RgbIm;

    pub fn show(_im: &RgbIm, _config: &ViewerConfig) -> Result<(), String> {
        Ok(())
    }
}

pub use imp::*;
