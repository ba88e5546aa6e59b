pub static SCALE_HELP: &str = "Resize the image using nearest neighbor sampling

Each output pixel copies the source pixel at
(floor(row * height / new_height), floor(col * width / new_width)).
Downscaling drops rows and columns, upscaling duplicates them.";

pub static BLEND_HELP: &str = "Blend the image with a second image

Every channel becomes alpha * input + (1 - alpha) * other, truncated.
The second image is resized to the input's dimensions when they differ.
Alpha is not limited to 0..1, use --clamp to keep channels displayable.";

pub static MORPH_HELP: &str = "Morph the image into a target image

Prints steps + 1 frames, frame k blends the input and target with
alpha = (steps - k) / steps, pausing after every frame.
The target is resized to the input's dimensions first.";
