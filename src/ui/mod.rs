pub mod dialogs;
pub mod style;
pub mod theme;

use iced::{
    alignment,
    widget::{button, column, container, row, text, text_input, Space},
    Element, Length,
};

use crate::application::StatusReport;
use theme::Palette;

/// Field contents and status label of the main window
#[derive(Debug, Default)]
pub struct MainWindow {
    pub url: String,
    pub folder: String,
    pub status: StatusReport,
}

#[derive(Debug, Clone)]
pub enum WindowMessage {
    UrlChanged(String),
    FolderChanged(String),
    BrowsePressed,
    DownloadPressed,
    ThemeTogglePressed,
}

impl MainWindow {
    pub fn update(&mut self, message: WindowMessage) {
        match message {
            WindowMessage::UrlChanged(url) => {
                self.url = url;
            }
            WindowMessage::FolderChanged(folder) => {
                self.folder = folder;
            }
            WindowMessage::BrowsePressed
            | WindowMessage::DownloadPressed
            | WindowMessage::ThemeTogglePressed => {
                // Will be handled by the app
            }
        }
    }

    pub fn view(
        &self,
        palette: Palette,
        toggle_icon: &'static str,
        downloading: bool,
    ) -> Element<'_, WindowMessage> {
        let header = container(
            row![
                text("▶ YTV Downloader")
                    .size(26)
                    .font(style::BOLD)
                    .color(palette.header_foreground),
                Space::new().width(Length::Fill),
                button(text(toggle_icon).size(20))
                    .on_press(WindowMessage::ThemeTogglePressed)
                    .style(move |_, status| style::flat(palette, status)),
            ]
            .align_y(alignment::Vertical::Center),
        )
        .style(move |_| style::surface(palette.header_background));

        let url_section = column![
            text("Paste Video Link:").size(13).color(palette.foreground),
            text_input("https://...", &self.url)
                .on_input(WindowMessage::UrlChanged)
                .padding(10)
                .size(15)
                .style(move |_, status| style::entry(palette, status)),
        ]
        .spacing(5);

        let folder_section = column![
            text("Save to Folder:").size(13).color(palette.foreground),
            row![
                text_input("Choose a folder...", &self.folder)
                    .on_input(WindowMessage::FolderChanged)
                    .padding(10)
                    .size(15)
                    .style(move |_, status| style::entry(palette, status)),
                button(text("Browse").size(13).font(style::BOLD))
                    .on_press(WindowMessage::BrowsePressed)
                    .padding([10, 20])
                    .style(move |_, status| style::secondary(palette, status)),
            ]
            .spacing(10)
            .align_y(alignment::Vertical::Center),
        ]
        .spacing(5);

        // no press handler while a download is in flight disables the button
        let download_button = button(
            container(text("DOWNLOAD VIDEO").size(17).font(style::BOLD))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press_maybe((!downloading).then_some(WindowMessage::DownloadPressed))
        .width(Length::Fill)
        .padding(14)
        .style(move |_, status| style::primary(palette, status));

        let status_label = container(
            text(self.status.text)
                .size(13)
                .font(style::ITALIC)
                .color(self.status.color.unwrap_or(palette.foreground)),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(10)
        .style(move |_| style::surface(palette.status_background));

        container(
            column![
                header,
                Space::new().height(Length::Fixed(10.0)),
                url_section,
                folder_section,
                Space::new().height(Length::Fixed(5.0)),
                download_button,
                status_label,
            ]
            .spacing(15),
        )
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| style::surface(palette.background))
        .into()
    }
}
