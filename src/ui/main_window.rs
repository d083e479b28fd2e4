use fltk::{
    app::Sender,
    group::{Flex, Group},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;
use crate::ui::error_banner::ErrorBanner;
use crate::ui::status_bar::StatusBar;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub banner: ErrorBanner,
    pub editor_area: Group,
    pub status: StatusBar,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "MarkPad");
    wind.set_xclass("MarkPad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Error banner (initially collapsed)
    let banner = ErrorBanner::new(&mut flex, sender);

    // Fill slot the editor host mounts into; its single child is
    // swapped out wholesale on every remount.
    let editor_area = Group::default();
    editor_area.end();

    let status = StatusBar::new(&mut flex);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        banner,
        editor_area,
        status,
    }
}
