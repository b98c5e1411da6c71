fn main() {
    dioxus::launch(ui::App);
}
