fn main() {
  ordsend::main();
}
