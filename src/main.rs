fn main() {
    consumer_chain_tool::app::cli::run();
}
