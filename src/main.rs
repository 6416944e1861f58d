// SPDX-License-Identifier: MPL-2.0

fn main() -> iced::Result {
    frontier_dash::app::run()
}
