
use crate::framework::{
    application::Context,
    updater::Updater,
    gui::GuiUpdateModule,
    camera::CameraUpdater,
};

use super::{
    scene::Scene,
    modules::{
        CollectUpdater,
        TeleportUpdater,
    },
    gui_modules::{
        WelcomePanelGui,
        CollectionGui,
        MessageOverlayGui,
        CameraGuiModule,
    },
};

#[cfg(feature = "stats")]
use super::gui_modules::stats_gui::StatsGui;

#[cfg(feature = "counters")]
use super::gui_modules::counters_gui::CountersGui;

pub fn define_updater(_context: &Context) -> Updater<Scene> {
    Updater::new()
        .with_module(GuiUpdateModule::new(vec![
            Box::new(WelcomePanelGui::new()),
            Box::new(CollectionGui),
            Box::new(MessageOverlayGui),
            Box::new(CameraGuiModule),
            #[cfg(feature = "stats")]
            Box::new(StatsGui),
            #[cfg(feature = "counters")]
            Box::new(CountersGui),
        ]))
        .with_module(CollectUpdater::new())
        .with_module(TeleportUpdater)
        .with_module(CameraUpdater)
}
