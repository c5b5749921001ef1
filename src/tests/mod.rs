mod classifieds;
mod special;
