pub fn style_gui(mut style: egui::Style) -> egui::Style {
    // egui's stock window shadow is too heavy over the 3d scene
    style.visuals.window_shadow = egui::epaint::Shadow {
        extrusion: 0.0,
        color: egui::Color32::BLACK,
    };
    style
}
